mod error;
pub use error::{Error, Result};

mod settings;
pub use settings::{Messages, Settings};

pub mod hardware;
pub use crate::hardware::{
    CameraService,
    NotificationSink,
    {PermissionService, PermissionStatus},
};

pub mod enumerator;
pub use enumerator::{CameraDescriptor, Facing};

pub mod torch;
use torch::TorchController;

mod event;
pub use event::{Event, EventHandler, Input, Lifetime};

pub mod prelude {
    pub use crate::{Flashlight, Context, Event, EventHandler, Input, Lifetime, Settings};
}

pub struct Context {
    pub hardware: hardware::Context,
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ///Nothing has run yet
    Created,
    AwaitingPermission,
    Denied,
    ///Enumeration ran, a camera may or may not be selected
    Ready,
}

/// The flashlight application core. Feed it every [`Event`] from the
/// dispatch thread; all failures end up as one notification each.
pub struct Flashlight {
    context: Context,
    torch: TorchController,
    phase: Phase,
}

impl Flashlight {
    pub fn new(context: Context) -> Self {
        Flashlight{context, torch: TorchController::new(), phase: Phase::Created}
    }

    /// Starts logging and builds the platform hardware context.
    pub fn start(app_name: &str, settings: Settings) -> Result<Self> {
        hardware::Logger::start(Some(settings.level()));
        let hardware = hardware::Context::new(app_name)?;
        Ok(Self::new(Context{hardware, settings}))
    }

    pub fn context(&self) -> &Context {&self.context}

    pub fn selected_camera(&self) -> Option<&str> {
        self.torch.selected()
    }

    pub fn torch_on(&self) -> bool {
        self.torch.is_on()
    }

    fn launch(&mut self) {
        match self.context.hardware.permissions.status() {
            PermissionStatus::Granted => self.initialize(),
            PermissionStatus::Denied => self.deny(),
            PermissionStatus::NotDetermined => {
                match self.context.hardware.permissions.request() {
                    Ok(()) => self.phase = Phase::AwaitingPermission,
                    Err(e) => {
                        self.phase = Phase::Denied;
                        self.report(&e);
                    }
                }
            }
        }
    }

    /// Enumerates the cameras and selects the first one with a flash,
    /// replacing any earlier selection.
    pub fn initialize(&mut self) {
        self.phase = Phase::Ready;
        match enumerator::discover(&*self.context.hardware.camera) {
            Ok(id) => {
                log::info!("using camera {id} for the torch");
                self.torch.select(Some(id));
            }
            Err(e) => {
                self.torch.select(None);
                self.report(&e);
            }
        }
    }

    fn deny(&mut self) {
        self.phase = Phase::Denied;
        self.report(&Error::PermissionDenied);
    }

    fn on_permission(&mut self, granted: bool) {
        match (granted, self.phase) {
            (true, Phase::Ready) => log::debug!("camera permission granted again, keeping selection"),
            (true, _) => self.initialize(),
            (false, _) => self.deny(),
        }
    }

    fn on_resumed(&mut self) {
        match self.phase {
            Phase::Created => self.launch(),
            Phase::AwaitingPermission => match self.context.hardware.permissions.status() {
                PermissionStatus::Granted => self.initialize(),
                PermissionStatus::Denied => self.deny(),
                PermissionStatus::NotDetermined => log::debug!("still waiting for camera permission"),
            },
            Phase::Denied | Phase::Ready => {}
        }
    }

    /// Forwards the switch position to the torch. Nothing reaches the
    /// camera once access was denied.
    pub fn toggle(&mut self, on: bool) {
        if self.phase == Phase::Denied {
            log::debug!("torch {} ignored, camera access denied", if on {"on"} else {"off"});
            return;
        }
        if let Err(e) = self.torch.set_torch(&*self.context.hardware.camera, on) {
            self.report(&e);
        }
    }

    fn report(&self, error: &Error) {
        log::warn!("{error}");
        self.context.hardware.notify(&self.context.settings.messages.for_error(error));
    }
}

impl EventHandler for Flashlight {
    fn event(&mut self, event: Event) {
        log::trace!("event {event:?}");
        match event {
            Event::Lifetime(Lifetime::Resumed) => self.on_resumed(),
            Event::Lifetime(Lifetime::Paused) => {},
            Event::Lifetime(Lifetime::Close) => log::debug!("closing, torch was {}", self.torch_on()),
            Event::Permission(granted) => self.on_permission(granted),
            Event::Input(Input::Toggle(on)) => self.toggle(on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::camera::dummy::DummyCamera;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct Permissions {
        status: Rc<Cell<PermissionStatus>>,
        requests: Rc<Cell<usize>>,
    }

    impl Permissions {
        fn new(status: PermissionStatus) -> Self {
            Permissions{status: Rc::new(Cell::new(status)), requests: Rc::new(Cell::new(0))}
        }
    }

    impl PermissionService for Permissions {
        fn status(&self) -> PermissionStatus {self.status.get()}
        fn request(&self) -> Result<()> {
            self.requests.set(self.requests.get() + 1);
            Ok(())
        }
    }

    struct Harness {
        app: Flashlight,
        camera: DummyCamera,
        permissions: Permissions,
        notices: Rc<RefCell<Vec<String>>>,
    }

    fn harness(camera: DummyCamera, status: PermissionStatus) -> Harness {
        let permissions = Permissions::new(status);
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let notices = notices.clone();
            move |message: &str| notices.borrow_mut().push(message.to_string())
        };
        let hardware = hardware::Context::with(camera.clone(), permissions.clone(), sink);
        let app = Flashlight::new(Context{hardware, settings: Settings::default()});
        Harness{app, camera, permissions, notices}
    }

    fn flash_cameras() -> DummyCamera {
        DummyCamera::new()
            .with_flash("1", Some(false))
            .with_flash("0", Some(true))
            .with_flash("2", Some(true))
    }

    fn messages() -> Messages {Messages::default()}

    #[test]
    fn granted_launch_selects_first_flash_camera() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.app.selected_camera(), Some("0"));
        assert!(h.notices.borrow().is_empty());
        assert_eq!(h.permissions.requests.get(), 0);
    }

    #[test]
    fn selection_is_not_redone_on_resume() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Lifetime(Lifetime::Paused));
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Permission(true));
        assert_eq!(h.app.selected_camera(), Some("0"));
    }

    #[test]
    fn no_flash_camera_notifies_once() {
        let camera = DummyCamera::new().with_flash("0", Some(false)).with_flash("1", None);
        let mut h = harness(camera, PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Input(Input::Toggle(true)));
        h.app.event(Event::Input(Input::Toggle(false)));

        assert_eq!(h.app.selected_camera(), None);
        assert_eq!(*h.notices.borrow(), vec![messages().no_flash_camera]);
        assert!(h.camera.torch_calls().is_empty());
    }

    #[test]
    fn empty_camera_list() {
        let mut h = harness(DummyCamera::new(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(*h.notices.borrow(), vec![messages().no_cameras]);
    }

    #[test]
    fn unreachable_service_reports_reason() {
        let camera = DummyCamera::new().with_flash("0", Some(true)).unreachable();
        let mut h = harness(camera, PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.app.selected_camera(), None);
        let notices = h.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].starts_with(&messages().init_failed));
        assert!(notices[0].contains("unreachable"));
    }

    #[test]
    fn permission_granted_later() {
        let mut h = harness(flash_cameras(), PermissionStatus::NotDetermined);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.permissions.requests.get(), 1);
        assert_eq!(h.app.selected_camera(), None);

        h.app.event(Event::Input(Input::Toggle(true)));
        assert!(h.camera.torch_calls().is_empty());

        h.app.event(Event::Permission(true));
        assert_eq!(h.app.selected_camera(), Some("0"));
        assert!(h.notices.borrow().is_empty());
    }

    #[test]
    fn permission_denied_skips_camera() {
        let mut h = harness(flash_cameras(), PermissionStatus::NotDetermined);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Permission(false));
        h.app.event(Event::Input(Input::Toggle(true)));

        assert_eq!(h.app.selected_camera(), None);
        assert_eq!(*h.notices.borrow(), vec![messages().permission_required]);
        assert!(h.camera.torch_calls().is_empty());
    }

    #[test]
    fn denial_after_selection_blocks_torch() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.app.selected_camera(), Some("0"));

        h.app.event(Event::Permission(false));
        h.app.event(Event::Input(Input::Toggle(true)));

        assert!(h.camera.torch_calls().is_empty());
        assert_eq!(*h.notices.borrow(), vec![messages().permission_required]);
    }

    #[test]
    fn grant_after_denial_enables_torch() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Permission(false));
        h.app.event(Event::Permission(true));
        h.app.event(Event::Input(Input::Toggle(true)));
        assert_eq!(h.camera.torch_calls(), vec![("0".to_string(), true)]);
    }

    #[test]
    fn resume_picks_up_permission_answer() {
        let mut h = harness(flash_cameras(), PermissionStatus::NotDetermined);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.app.event(Event::Lifetime(Lifetime::Paused));
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.app.selected_camera(), None);

        h.permissions.status.set(PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.app.selected_camera(), Some("0"));
        assert_eq!(h.permissions.requests.get(), 1);
    }

    #[test]
    fn denied_at_launch() {
        let mut h = harness(flash_cameras(), PermissionStatus::Denied);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(h.permissions.requests.get(), 0);
        assert_eq!(*h.notices.borrow(), vec![messages().permission_required]);
    }

    #[test]
    fn toggles_reach_host_in_order() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        for on in [true, false, true] {
            h.app.event(Event::Input(Input::Toggle(on)));
        }
        assert_eq!(h.camera.torch_calls(), vec![
            ("0".to_string(), true),
            ("0".to_string(), false),
            ("0".to_string(), true),
        ]);
        assert!(h.app.torch_on());
        assert!(h.notices.borrow().is_empty());
    }

    #[test]
    fn torch_failure_notifies_once() {
        let mut h = harness(flash_cameras(), PermissionStatus::Granted);
        h.app.event(Event::Lifetime(Lifetime::Resumed));
        h.camera.reject_torch(true);
        h.app.event(Event::Input(Input::Toggle(true)));

        assert_eq!(*h.notices.borrow(), vec![messages().torch_failed]);
        assert_eq!(h.camera.torch_calls().len(), 1);
        assert!(h.app.torch_on());
    }

    #[test]
    fn configured_messages_are_shown() {
        let settings = Settings::from_json(r#"{"messages": {"no_flash_camera": "未找到支援閃光燈的相機"}}"#).unwrap();
        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let notices = notices.clone();
            move |message: &str| notices.borrow_mut().push(message.to_string())
        };
        let hardware = hardware::Context::with(
            DummyCamera::new().with_flash("0", Some(false)),
            Permissions::new(PermissionStatus::Granted),
            sink,
        );
        let mut app = Flashlight::new(Context{hardware, settings});
        app.event(Event::Lifetime(Lifetime::Resumed));
        assert_eq!(*notices.borrow(), vec!["未找到支援閃光燈的相機".to_string()]);
    }

    #[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
    #[test]
    fn desktop_has_no_torch_camera() {
        let mut app = Flashlight::start("torchlight", Settings::default()).unwrap();
        app.event(Event::Lifetime(Lifetime::Resumed));
        app.event(Event::Input(Input::Toggle(true)));
        assert_eq!(app.selected_camera(), None);
    }
}
