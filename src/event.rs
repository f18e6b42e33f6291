#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Lifetime(Lifetime),
    Input(Input),
    ///Answer to a camera permission request
    Permission(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lifetime {
    ///App is in the foreground, the first one is the launch
    Resumed,
    ///App was paused, a permission dialog does this too
    Paused,
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    ///The torch switch was flipped to the given position
    Toggle(bool),
}

/// Receives every event on the dispatch thread, one at a time.
pub trait EventHandler {
    fn event(&mut self, event: Event);
}
