//! TAI ↔ TT: a fixed 32.184 s offset.

use super::{ToTAI, ToTT};
use crate::constants::{SECONDS_TO_DAYS, TT_TAI_OFFSET_SECONDS};
use crate::scales::{TAI, TT};
use crate::TimeResult;

impl ToTT for TAI {
    fn to_tt(&self) -> TimeResult<TT> {
        Ok(TT::from_julian_date(
            self.to_julian_date()
                .add_days(TT_TAI_OFFSET_SECONDS * SECONDS_TO_DAYS),
        ))
    }
}

impl ToTAI for TT {
    fn to_tai(&self) -> TimeResult<TAI> {
        Ok(TAI::from_julian_date(
            self.to_julian_date()
                .add_days(-TT_TAI_OFFSET_SECONDS * SECONDS_TO_DAYS),
        ))
    }
}

impl ToTT for TT {
    fn to_tt(&self) -> TimeResult<TT> {
        Ok(*self)
    }
}

impl ToTAI for TAI {
    fn to_tai(&self) -> TimeResult<TAI> {
        Ok(*self)
    }
}
