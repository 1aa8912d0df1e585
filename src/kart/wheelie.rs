use crate::kart::SlipDriftHook;

#[derive(Clone, Debug, Default)]
pub struct Wheelie {
    is_wheelieing: bool,
    cooldown: u16,
    frame: u16,
    rot: f32,
    rot_dec: f32,
}

impl Wheelie {
    pub fn new() -> Wheelie {
        Wheelie::default()
    }

    pub fn is_wheelieing(&self) -> bool {
        self.is_wheelieing
    }

    pub fn frame(&self) -> u16 {
        self.frame
    }

    /// Suspension pitch added on top of the body rotation.
    pub fn rot(&self) -> f32 {
        self.rot
    }

    pub fn try_start(&mut self, is_drifting: bool) -> bool {
        if self.is_wheelieing || self.cooldown > 0 || is_drifting {
            return false;
        }

        self.is_wheelieing = true;
        self.cooldown = 20;
        true
    }

    pub fn update(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);

        if self.is_wheelieing {
            self.frame += 1;
            if self.frame > 180 {
                self.cancel();
            } else {
                self.rot = (self.rot + 0.01).min(0.07);
            }
        } else if self.rot > 0.0 {
            self.rot_dec += 0.001;
            self.rot = (self.rot - self.rot_dec).max(0.0);
        }
    }

    pub fn cancel(&mut self) {
        self.is_wheelieing = false;
        self.frame = 0;
        self.rot_dec = 0.0;
    }
}

impl SlipDriftHook for Wheelie {
    fn on_slip_drift(&mut self) {
        if self.is_wheelieing {
            self.cancel();
        }
    }
}
