//! Setting type names accepted by the settings endpoints.

use std::fmt;
use std::str::FromStr;

use crate::error::ZoomError;

/// Site setting types, as named in `phone/sites/{id}/settings/{type}`.
///
/// Only [`HolidayHours`](Self::HolidayHours) and [`Security`](Self::Security)
/// can be added or deleted; the rest can only be read and updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSettingType {
    LocalBasedRouting,
    BusinessHours,
    ClosedHours,
    HolidayHours,
    OutboundCallerId,
    AudioPrompt,
    DeskPhone,
    DialByName,
    BillingAccount,
    Security,
}

impl SiteSettingType {
    pub const ALL: [Self; 10] = [
        Self::LocalBasedRouting,
        Self::BusinessHours,
        Self::ClosedHours,
        Self::HolidayHours,
        Self::OutboundCallerId,
        Self::AudioPrompt,
        Self::DeskPhone,
        Self::DialByName,
        Self::BillingAccount,
        Self::Security,
    ];

    /// The API's name for this setting type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LocalBasedRouting => "local_based_routing",
            Self::BusinessHours => "business_hours",
            Self::ClosedHours => "closed_hours",
            Self::HolidayHours => "holiday_hours",
            Self::OutboundCallerId => "outbound_caller_id",
            Self::AudioPrompt => "audio_prompt",
            Self::DeskPhone => "desk_phone",
            Self::DialByName => "dial_by_name",
            Self::BillingAccount => "billing_account",
            Self::Security => "security",
        }
    }

    /// Query parameter naming the entry to remove when deleting a setting.
    ///
    /// Holiday hours are removed by holiday ID; security settings by device
    /// type.
    pub fn delete_param(self) -> &'static str {
        match self {
            Self::HolidayHours => "holiday_id",
            _ => "device_type",
        }
    }
}

impl fmt::Display for SiteSettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteSettingType {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ZoomError::InvalidSettingType(s.to_string()))
    }
}

/// Common area setting types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonAreaSettingType {
    DeskPhone,
}

impl CommonAreaSettingType {
    /// The API's name for this setting type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeskPhone => "desk_phone",
        }
    }
}

impl fmt::Display for CommonAreaSettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommonAreaSettingType {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desk_phone" => Ok(Self::DeskPhone),
            other => Err(ZoomError::InvalidSettingType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_setting_names_parse_back() {
        for setting in SiteSettingType::ALL {
            assert_eq!(setting.as_str().parse::<SiteSettingType>().unwrap(), setting);
        }
    }

    #[test]
    fn test_delete_param_selection() {
        assert_eq!(SiteSettingType::HolidayHours.delete_param(), "holiday_id");
        assert_eq!(SiteSettingType::Security.delete_param(), "device_type");
    }

    #[test]
    fn test_unknown_setting_type() {
        let err = "holidays".parse::<SiteSettingType>().unwrap_err();
        assert!(matches!(err, ZoomError::InvalidSettingType(ref s) if s == "holidays"));
        assert!("security".parse::<CommonAreaSettingType>().is_err());
        assert_eq!(
            "desk_phone".parse::<CommonAreaSettingType>().unwrap(),
            CommonAreaSettingType::DeskPhone
        );
    }
}
