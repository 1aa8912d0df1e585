use std::convert::TryFrom;

use tracing::{debug, trace};

use crate::error::Error;

/// Per-category tuning values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoostParams {
    pub multiplier: f32,
    pub acceleration: f32,
    pub speed_limit: Option<f32>,
    pub fov_multiplier: f32,
}

impl BoostParams {
    pub const DEFAULT: [BoostParams; 6] = [
        BoostParams::new(1.2, 3.0, None, 0.5),
        BoostParams::new(1.25, 5.0, Some(105.0), 0.75),
        BoostParams::new(1.4, 7.0, Some(115.0), 1.0),
        BoostParams::new(1.7, 10.0, Some(145.0), 1.0),
        BoostParams::new(1.3, 6.0, None, 0.85),
        BoostParams::new(1.25, 3.0, Some(95.0), 0.6),
    ];

    const fn new(
        multiplier: f32,
        acceleration: f32,
        speed_limit: Option<f32>,
        fov_multiplier: f32,
    ) -> BoostParams {
        BoostParams {
            multiplier,
            acceleration,
            speed_limit,
            fov_multiplier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoostCategory {
    AllTerrain = 0, // mt, ssmt, start boost
    Star = 1,
    MushroomOrPanel = 2,
    Bullet = 3,
    TrickOrZipper = 4,
    Mega = 5,
}

impl BoostCategory {
    pub const ALL: [BoostCategory; 6] = [
        BoostCategory::AllTerrain,
        BoostCategory::Star,
        BoostCategory::MushroomOrPanel,
        BoostCategory::Bullet,
        BoostCategory::TrickOrZipper,
        BoostCategory::Mega,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    fn flag(self) -> u8 {
        1 << self as u8
    }
}

impl TryFrom<u8> for BoostCategory {
    type Error = Error;

    fn try_from(raw: u8) -> Result<BoostCategory, Error> {
        BoostCategory::ALL
            .get(raw as usize)
            .copied()
            .ok_or(Error::InvalidBoostCategory(raw))
    }
}

/// Outcome of a single [`BoostState::calc`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoostTick {
    /// The merged effect is worth applying this frame.
    pub is_boosting: bool,
    /// The last active category ran out this frame.
    pub just_ended: bool,
}

#[derive(Clone, Debug)]
pub struct BoostState {
    params: [BoostParams; 6],
    timers: [i16; 6],
    active: u8,
    multiplier: f32,
    acceleration: f32,
    speed_limit: Option<f32>,
    fov_multiplier: f32,
}

impl BoostState {
    pub fn new() -> BoostState {
        BoostState::with_params(BoostParams::DEFAULT)
    }

    pub fn with_params(params: [BoostParams; 6]) -> BoostState {
        BoostState {
            params,
            timers: [0; 6],
            active: 0,
            multiplier: 1.0,
            acceleration: 1.0,
            speed_limit: None,
            fov_multiplier: 0.0,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    pub fn speed_limit(&self) -> Option<f32> {
        self.speed_limit
    }

    pub fn fov_multiplier(&self) -> f32 {
        self.fov_multiplier
    }

    pub fn timer(&self, category: BoostCategory) -> i16 {
        self.timers[category.index()]
    }

    pub fn is_active(&self, category: BoostCategory) -> bool {
        self.active & category.flag() != 0
    }

    pub fn params(&self, category: BoostCategory) -> BoostParams {
        self.params[category.index()]
    }

    /// Whether any timer is still running. The frame on which the last one runs out still
    /// reports [`BoostTick::is_boosting`].
    pub fn has_active_category(&self) -> bool {
        self.active != 0
    }

    pub fn active_categories(&self) -> impl Iterator<Item = BoostCategory> + '_ {
        BoostCategory::ALL
            .iter()
            .copied()
            .filter(move |category| self.is_active(*category))
    }

    /// Arms `category` for `frames` frames. An already running timer of the same category is
    /// never shortened: the call is rejected if that timer has at least `frames` left.
    pub fn activate(&mut self, category: BoostCategory, frames: i32) -> bool {
        let timer = &mut self.timers[category.index()];
        if self.active & category.flag() != 0 && i32::from(*timer) >= frames {
            trace!(?category, frames, remaining = *timer, "boost activation rejected");
            return false;
        }

        *timer = frames.clamp(i16::MIN.into(), i16::MAX.into()) as i16;
        self.active |= category.flag();
        self.fov_multiplier = self.params[category.index()].fov_multiplier;
        trace!(?category, frames, "boost activated");
        true
    }

    /// Resolves this frame's effect and counts every active timer down by one.
    ///
    /// Active categories are visited in ascending order and each overwrites the output, so the
    /// highest active category alone determines the multiplier, acceleration and speed limit.
    pub fn calc(&mut self) -> BoostTick {
        let mut has_ended = false;
        let mut has_remaining = false;

        self.multiplier = 1.0;
        self.acceleration = 1.0;
        self.speed_limit = None;

        for category in BoostCategory::ALL.iter().copied() {
            if self.active & category.flag() == 0 {
                continue;
            }

            let params = &self.params[category.index()];
            self.multiplier = params.multiplier;
            self.acceleration = params.acceleration;
            self.speed_limit = params.speed_limit;

            let timer = &mut self.timers[category.index()];
            *timer = timer.saturating_sub(1);
            if *timer < 1 {
                self.active &= !category.flag();
                has_ended = true;
                trace!(?category, "boost expired");
            } else {
                has_remaining = true;
            }
        }

        let just_ended = has_ended && !has_remaining;
        if just_ended {
            debug!("last boost ended");
        }

        let has_speed_limit = self.speed_limit.map_or(false, |limit| limit > 0.0);
        BoostTick {
            is_boosting: self.multiplier > 1.0 || has_speed_limit,
            just_ended,
        }
    }

    /// Clears every timer and restores the neutral output. The FOV hint is kept.
    pub fn reset(&mut self) {
        self.timers = [0; 6];
        self.active = 0;
        self.multiplier = 1.0;
        self.acceleration = 1.0;
        self.speed_limit = None;
        debug!("boost state reset");
    }
}

impl Default for BoostState {
    fn default() -> BoostState {
        BoostState::new()
    }
}
