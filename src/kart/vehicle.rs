use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vehicle {
    id: u8,
}

impl Vehicle {
    const COUNT: u8 = 36;
    const FIRST_BIKE: u8 = 18;

    pub fn try_from_raw(id: u8) -> Result<Vehicle, Error> {
        if id < Vehicle::COUNT {
            Ok(Vehicle { id })
        } else {
            Err(Error::InvalidVehicle(id))
        }
    }

    pub fn is_bike(&self) -> bool {
        self.id >= Vehicle::FIRST_BIKE
    }
}

impl From<Vehicle> for u8 {
    fn from(vehicle: Vehicle) -> u8 {
        vehicle.id
    }
}
