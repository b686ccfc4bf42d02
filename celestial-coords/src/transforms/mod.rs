use crate::{frames::ICRSPosition, CoordResult};
use celestial_time::TT;

/// A sky position that converts to and from the ICRS.
///
/// `epoch` is the TT date of the target frame when converting from ICRS.
/// Frames that carry their own equinox, or none, ignore it on the way back.
pub trait CoordinateFrame: Sized {
    fn to_icrs(&self, epoch: &TT) -> CoordResult<ICRSPosition>;

    fn from_icrs(icrs: &ICRSPosition, epoch: &TT) -> CoordResult<Self>;
}
