use bitflags::bitflags;

bitflags! {
    /// Bits of the host's primary kart status word that the pre-drift logic reads or writes.
    /// Bit positions match the host layout so the word can be wrapped and written back as is.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    struct Flags: u32 {
        const DRIFT_INPUT      = 0x4;
        const DRIFT_MANUAL     = 0x8;
        const STICK_LEFT       = 0x2000;
        const GROUND           = 0x40000;
        const HOP              = 0x80000;
        const STICK_RIGHT      = 0x1000000;
        const SLIPDRIFT_CHARGE = 0x8000000;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KartState {
    flags: Flags,
}

impl KartState {
    pub fn new() -> KartState {
        KartState::default()
    }

    /// Wraps a raw status word. Bits without a name here are carried through untouched.
    pub fn from_bits(bits: u32) -> KartState {
        KartState {
            flags: Flags::from_bits_retain(bits),
        }
    }

    pub fn bits(&self) -> u32 {
        self.flags.bits()
    }

    pub fn ground(&self) -> bool {
        self.flags.contains(Flags::GROUND)
    }

    pub fn hop(&self) -> bool {
        self.flags.contains(Flags::HOP)
    }

    pub fn drift_manual(&self) -> bool {
        self.flags.contains(Flags::DRIFT_MANUAL)
    }

    pub fn stick_left(&self) -> bool {
        self.flags.contains(Flags::STICK_LEFT)
    }

    pub fn stick_right(&self) -> bool {
        self.flags.contains(Flags::STICK_RIGHT)
    }

    pub fn drift_input(&self) -> bool {
        self.flags.contains(Flags::DRIFT_INPUT)
    }

    pub fn slipdrift_charge(&self) -> bool {
        self.flags.contains(Flags::SLIPDRIFT_CHARGE)
    }

    pub fn set_ground(&mut self, ground: bool) {
        self.flags.set(Flags::GROUND, ground);
    }

    pub fn set_hop(&mut self, hop: bool) {
        self.flags.set(Flags::HOP, hop);
    }

    pub fn set_drift_manual(&mut self, drift_manual: bool) {
        self.flags.set(Flags::DRIFT_MANUAL, drift_manual);
    }

    pub fn set_stick_left(&mut self, stick_left: bool) {
        self.flags.set(Flags::STICK_LEFT, stick_left);
    }

    pub fn set_stick_right(&mut self, stick_right: bool) {
        self.flags.set(Flags::STICK_RIGHT, stick_right);
    }

    pub fn set_drift_input(&mut self, drift_input: bool) {
        self.flags.set(Flags::DRIFT_INPUT, drift_input);
    }

    pub fn set_slipdrift_charge(&mut self, slipdrift_charge: bool) {
        self.flags.set(Flags::SLIPDRIFT_CHARGE, slipdrift_charge);
    }
}
