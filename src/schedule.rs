//! Frame loop driving a [`Field`], with a handle to stop it.
//!
//! In the browser the loop is re-armed through `requestAnimationFrame`; the
//! same [`FrameLoop::frame`] call is what tests use to single-step.

use crate::draw::Painter;
use crate::field::Field;
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

pub struct FrameLoop {
    field: Field,
    handle: StopHandle,
}

impl FrameLoop {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            handle: StopHandle::new(),
        }
    }

    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }

    /// Step and paint one frame unless stopped. The caller schedules the next
    /// frame only on [`Control::Continue`].
    pub fn frame<P: Painter>(&mut self, painter: &mut P) -> Result<Control, P::Error> {
        if self.handle.is_stopped() {
            return Ok(Control::Stop);
        }
        self.field.step();
        self.field.render(painter)?;
        Ok(Control::Continue)
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}
