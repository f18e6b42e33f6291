use jni::objects::{GlobalRef, JObject};
use jni::sys::jobject;
use jni::{JNIEnv, JavaVM};
use std::error::Error;
use std::sync::Arc;

/// The JavaVM and application context shared by the Android backends.
#[derive(Clone)]
pub struct AndroidContext {
    vm: Arc<JavaVM>,
    context: GlobalRef,
}

impl AndroidContext {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let vm = Arc::new(unsafe { JavaVM::from_raw(ndk_context::android_context().vm().cast())? });

        let context = {
            let mut env = vm.attach_current_thread()?;

            let ctx_ptr = ndk_context::android_context().context();
            if ctx_ptr.is_null() {
                return Err("Failed to get Android context".into());
            }

            let context_obj = unsafe { JObject::from_raw(ctx_ptr as jobject) };
            env.new_global_ref(context_obj)?
        };

        Ok(Self{vm, context})
    }

    pub fn context(&self) -> &JObject<'static> {
        self.context.as_obj()
    }

    /// Runs `f` on an attached env. A pending Java exception is cleared
    /// before the error is returned so the next call starts clean.
    pub fn with_env<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv) -> Result<T, Box<dyn Error>>
    ) -> Result<T, Box<dyn Error>> {
        let mut env = self.vm.attach_current_thread()?;
        let result = f(&mut env);
        if result.is_err() && env.exception_check().unwrap_or(false) {
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        result
    }
}
