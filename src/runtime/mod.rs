//! Runtime module - drives a panel model against a host
//!
//! - `PanelHost` is the seam to the UI toolkit: it performs the side effects
//!   `update` asks for.
//! - `PanelRuntime` owns the model, feeds it messages, executes commands, and
//!   fans notifications out to observers.
//! - `sim` provides an in-memory host for tests and the replay tool.
//!
//! Everything runs on one thread. Animation completions come back through a
//! channel so a host can report them whenever its event loop gets to it.

pub mod sim;

pub use sim::{HostCall, SimulatedHost};

use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::{Animation, Cmd};
use crate::errors::PanelError;
use crate::geometry::{Rect, SwipeAxis};
use crate::messages::PanelMsg;
use crate::model::PanelModel;
use crate::observer::{Observers, PanelObserver};
use crate::panel::{GestureKind, ManagedSurface};
use crate::update::{start, teardown, update};

/// Token a host redeems when a frame change has finished animating
#[derive(Debug)]
pub struct MoveCompletion {
    tx: Sender<PanelMsg>,
    offset: f64,
}

impl MoveCompletion {
    /// Offset that was requested for this move (unclamped)
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Report completion. Delivered on the runtime's next `pump`.
    pub fn complete(self) {
        // The runtime may already be gone; nothing left to notify then
        let _ = self.tx.send(PanelMsg::MoveFinished {
            offset: self.offset,
        });
    }
}

/// Side effects the UI toolkit performs for the panel
pub trait PanelHost {
    /// Add the surface to the host container at `frame`
    fn attach_surface(&mut self, surface: ManagedSurface, frame: Rect);

    /// Remove the surface from the host container
    fn detach_surface(&mut self, surface: ManagedSurface);

    /// Move the surface to `frame`. A new call while an animation is running
    /// retargets the surface; each call's completion must still be redeemed.
    fn set_surface_frame(
        &mut self,
        surface: ManagedSurface,
        frame: Rect,
        animation: Animation,
        completion: MoveCompletion,
    );

    fn attach_recognizer(&mut self, kind: GestureKind);

    fn detach_recognizer(&mut self, kind: GestureKind);
}

/// Owns a panel model and runs the message/command loop against a host
pub struct PanelRuntime<H: PanelHost> {
    model: PanelModel,
    host: H,
    observers: Observers,
    msg_tx: Sender<PanelMsg>,
    msg_rx: Receiver<PanelMsg>,
}

impl<H: PanelHost> PanelRuntime<H> {
    /// Wrap a model and run its start-up commands (surface placement, initial recognizers)
    pub fn new(model: PanelModel, host: H) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut runtime = Self {
            model,
            host,
            observers: Observers::new(),
            msg_tx,
            msg_rx,
        };
        let cmd = start(&mut runtime.model);
        runtime.process_cmd(cmd);
        runtime
    }

    pub fn model(&self) -> &PanelModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Register a non-owning observer
    pub fn subscribe(&mut self, observer: &Rc<dyn PanelObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Rc<dyn PanelObserver>) {
        self.observers.unsubscribe(observer);
    }

    /// Sender for messages produced outside a `dispatch` call
    pub fn sender(&self) -> Sender<PanelMsg> {
        self.msg_tx.clone()
    }

    /// Run one message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, msg: PanelMsg) {
        let cmd = update(&mut self.model, msg);
        self.process_cmd(cmd);
    }

    /// Deliver queued messages (animation completions). Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    // === Public panel operations ===

    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.dispatch(PanelMsg::SetSwipeEnabled(enabled));
    }

    pub fn set_dismiss_enabled(&mut self, enabled: bool) {
        self.dispatch(PanelMsg::SetDismissEnabled(enabled));
    }

    /// Move to `offset`; `None` uses the configured duration
    pub fn move_to(&mut self, offset: f64, duration: Option<f64>) {
        self.dispatch(PanelMsg::Move { offset, duration });
    }

    pub fn present(&mut self, duration: Option<f64>) {
        self.dispatch(PanelMsg::Present { duration });
    }

    pub fn dismiss(&mut self, duration: Option<f64>) {
        self.dispatch(PanelMsg::Dismiss { duration });
    }

    pub fn current_offset(&self) -> Option<f64> {
        self.model.current_offset()
    }

    pub fn axis(&self) -> SwipeAxis {
        self.model.axis()
    }

    pub fn set_axis(&mut self, axis: SwipeAxis) -> Result<(), PanelError> {
        self.model.set_axis(axis)
    }

    pub fn closed_frame(&self) -> Option<Rect> {
        self.model.closed_frame()
    }

    pub fn open_frame(&self) -> Option<Rect> {
        self.model.open_frame()
    }

    pub fn set_closed_frame(&mut self, closed: Rect) -> Result<(), PanelError> {
        self.model.set_closed_frame(closed)
    }

    pub fn set_open_frame(&mut self, open: Rect) -> Result<(), PanelError> {
        self.model.set_open_frame(open)
    }

    pub fn set_frames(&mut self, closed: Rect, open: Rect) -> Result<(), PanelError> {
        self.model.set_frames(closed, open)
    }

    fn process_cmd(&mut self, cmd: Option<Cmd>) {
        let Some(cmd) = cmd else {
            return;
        };
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::AttachSurface { surface, frame } => self.host.attach_surface(surface, frame),
                Cmd::DetachSurface { surface } => self.host.detach_surface(surface),
                Cmd::SetSurfaceFrame {
                    surface,
                    frame,
                    animation,
                    offset,
                } => {
                    let completion = MoveCompletion {
                        tx: self.msg_tx.clone(),
                        offset,
                    };
                    self.host
                        .set_surface_frame(surface, frame, animation, completion);
                }
                Cmd::AttachRecognizer(kind) => self.host.attach_recognizer(kind),
                Cmd::DetachRecognizer(kind) => self.host.detach_recognizer(kind),
                Cmd::Notify(event) => self.observers.emit(&event),
            }
        }
    }
}

impl PanelRuntime<SimulatedHost> {
    /// Finish every running animation and deliver the completions
    pub fn settle(&mut self) -> usize {
        self.host.finish_animations();
        self.pump()
    }
}

impl<H: PanelHost> Drop for PanelRuntime<H> {
    fn drop(&mut self) {
        let cmd = teardown(&mut self.model);
        self.process_cmd(cmd);
    }
}
