use crate::battle::state::CaptureDestination;
use crate::config::CAPTURE_STORAGE_CAP;
use crate::profile::Profile;

/// A capture attempt needs a ball in the bag.
pub fn can_attempt_capture(profile: &Profile) -> bool {
    profile.balls > 0
}

/// Where a freshly caught creature would go: the party while it has room,
/// then storage while it holds fewer than six, otherwise nowhere.
pub fn capture_destination(profile: &Profile) -> CaptureDestination {
    if !profile.is_party_full() {
        CaptureDestination::Party
    } else if profile.storage().len() < CAPTURE_STORAGE_CAP {
        CaptureDestination::Storage
    } else {
        CaptureDestination::Released
    }
}
