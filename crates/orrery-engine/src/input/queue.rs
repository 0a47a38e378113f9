/// Named host event channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventChannel {
    PointerMove,
    PointerDown,
    PointerUp,
    Wheel,
    Input,
    Click,
    Resize,
}

impl EventChannel {
    pub const COUNT: usize = 7;

    pub const ALL: [EventChannel; Self::COUNT] = [
        EventChannel::PointerMove,
        EventChannel::PointerDown,
        EventChannel::PointerUp,
        EventChannel::Wheel,
        EventChannel::Input,
        EventChannel::Click,
        EventChannel::Resize,
    ];

    /// DOM event name the channel corresponds to.
    pub fn name(self) -> &'static str {
        match self {
            EventChannel::PointerMove => "pointermove",
            EventChannel::PointerDown => "pointerdown",
            EventChannel::PointerUp => "pointerup",
            EventChannel::Wheel => "wheel",
            EventChannel::Input => "input",
            EventChannel::Click => "click",
            EventChannel::Resize => "resize",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Input event types the engine understands.
/// Pointer coordinates are normalized device coordinates (x right, y up).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    /// Scroll wheel, positive = away from the user.
    Wheel { delta: f32 },
    /// A UI control changed. `control` identifies it; `value` is its raw text.
    Input { control: u32, value: String },
    /// A UI button was clicked.
    Click { target: u32 },
    /// Viewport resized (CSS pixels).
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            InputEvent::PointerMove { .. } => EventChannel::PointerMove,
            InputEvent::PointerDown { .. } => EventChannel::PointerDown,
            InputEvent::PointerUp { .. } => EventChannel::PointerUp,
            InputEvent::Wheel { .. } => EventChannel::Wheel,
            InputEvent::Input { .. } => EventChannel::Input,
            InputEvent::Click { .. } => EventChannel::Click,
            InputEvent::Resize { .. } => EventChannel::Resize,
        }
    }
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them at the start of each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
