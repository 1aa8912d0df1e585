use tracing::{debug, trace};

use crate::kart::KartState;

const MAX_HOP_FRAME: u8 = 3;

/// Vehicle-specific reaction to a slipdrift charge engaging.
pub trait SlipDriftHook {
    fn on_slip_drift(&mut self);
}

impl<H: SlipDriftHook + ?Sized> SlipDriftHook for &mut H {
    fn on_slip_drift(&mut self) {
        (**self).on_slip_drift();
    }
}

impl<H: SlipDriftHook> SlipDriftHook for Option<H> {
    fn on_slip_drift(&mut self) {
        if let Some(hook) = self {
            hook.on_slip_drift();
        }
    }
}

/// Tracks the charge phase that precedes a drift, either from a hop or from a slipdrift.
#[derive(Clone, Debug, Default)]
pub struct DriftChargeController {
    hop_stick_direction: i8,
    hop_frame: u8,
}

impl DriftChargeController {
    pub fn new() -> DriftChargeController {
        DriftChargeController::default()
    }

    /// -1 for right, 1 for left, 0 while unset.
    pub fn hop_stick_direction(&self) -> i8 {
        self.hop_stick_direction
    }

    pub fn hop_frame(&self) -> u8 {
        self.hop_frame
    }

    /// Returns whether the kart is charging a drift this frame.
    pub fn update(&mut self, state: &mut KartState, hook: &mut impl SlipDriftHook) -> bool {
        self.evaluate_slipdrift_charge(state, hook);

        if state.hop() {
            self.latch_drift_direction(state);

            if self.hop_frame < MAX_HOP_FRAME {
                self.hop_frame += 1;
            }
        } else if state.slipdrift_charge() {
            self.hop_frame = 0;
        }

        state.hop() || state.slipdrift_charge()
    }

    /// Forgets the latched direction so the next attempt can pick a new one.
    pub fn end_attempt(&mut self) {
        self.hop_stick_direction = 0;
        self.hop_frame = 0;
    }

    fn evaluate_slipdrift_charge(&mut self, state: &mut KartState, hook: &mut impl SlipDriftHook) {
        if state.ground() || state.hop() || state.drift_manual() {
            return;
        }

        if !state.stick_left() && !state.stick_right() {
            return;
        }

        if !state.drift_input() {
            if state.slipdrift_charge() {
                debug!("slipdrift charge dropped");
            }
            state.set_slipdrift_charge(false);
            return;
        }

        if state.slipdrift_charge() || self.hop_stick_direction != 0 {
            return;
        }

        self.latch_drift_direction(state);
        if self.hop_stick_direction == 0 {
            return;
        }

        state.set_slipdrift_charge(true);
        debug!(direction = self.hop_stick_direction, "slipdrift charge engaged");
        hook.on_slip_drift();
    }

    fn latch_drift_direction(&mut self, state: &KartState) {
        if self.hop_stick_direction != 0 {
            return;
        }

        if state.stick_right() {
            self.hop_stick_direction = -1;
        } else if state.stick_left() {
            self.hop_stick_direction = 1;
        }

        if self.hop_stick_direction != 0 {
            trace!(direction = self.hop_stick_direction, "drift direction latched");
        }
    }
}
