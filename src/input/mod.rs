use egui::{Context, Pos2, Rect};

/// Phase of a touch interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// A single touch sample in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub pos: Pos2,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, pos: Pos2) -> Self {
        Self { phase, pos }
    }
}

/// Primary pointer state for one frame, as read from egui
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.interact_pos(),
            pressed: input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        })
    }
}

/// Turns egui pointer input into touch events for the canvas.
///
/// A gesture only starts when the press lands inside the canvas; once
/// started it is followed outside the canvas until release.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pixels_per_point: f32,
    last_pointer_pos: Option<Pos2>,
    tracking: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            pixels_per_point: 1.0,
            last_pointer_pos: None,
            tracking: false,
        }
    }

    /// Update where the canvas is drawn on screen and the display scale
    pub fn set_canvas_rect(&mut self, rect: Rect, pixels_per_point: f32) {
        self.canvas_rect = rect;
        self.pixels_per_point = pixels_per_point;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Screen point to surface pixels
    fn to_surface(&self, pos: Pos2) -> Pos2 {
        ((pos - self.canvas_rect.min) * self.pixels_per_point).to_pos2()
    }

    /// Process raw egui input and generate touch events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<TouchEvent> {
        self.translate(PointerSnapshot::from_egui(ctx))
    }

    pub fn translate(&mut self, pointer: PointerSnapshot) -> Vec<TouchEvent> {
        let mut events = Vec::new();

        if pointer.pressed {
            if let Some(pos) = pointer.pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                events.push(TouchEvent::new(TouchPhase::Started, self.to_surface(pos)));
                self.tracking = true;
                self.last_pointer_pos = Some(pos);
            }
        }

        if !self.tracking {
            return events;
        }

        match pointer.pos {
            Some(pos) => {
                if pointer.down && Some(pos) != self.last_pointer_pos {
                    events.push(TouchEvent::new(TouchPhase::Moved, self.to_surface(pos)));
                    self.last_pointer_pos = Some(pos);
                }
            }
            None if !pointer.released => {
                // Pointer gone without a release (touch cancelled, left the window)
                events.push(TouchEvent::new(
                    TouchPhase::Cancelled,
                    self.last_pointer_pos
                        .map(|pos| self.to_surface(pos))
                        .unwrap_or(Pos2::ZERO),
                ));
                self.tracking = false;
                self.last_pointer_pos = None;
                return events;
            }
            None => {}
        }

        if pointer.released {
            let pos = pointer.pos.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
            events.push(TouchEvent::new(TouchPhase::Ended, self.to_surface(pos)));
            self.tracking = false;
            self.last_pointer_pos = None;
        }

        events
    }
}
