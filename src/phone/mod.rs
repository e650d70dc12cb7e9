//! Zoom Phone resource endpoints.

mod common_areas;
mod devices;
mod settings;
mod sites;

pub use common_areas::PhoneCommonAreas;
pub use devices::PhoneDevices;
pub use settings::{CommonAreaSettingType, SiteSettingType};
pub use sites::PhoneSites;
