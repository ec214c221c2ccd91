//! Device records supplied by the source store at session load.

use serde::{Deserialize, Serialize};

/// Static descriptive metadata for one device record.
///
/// These fields never change during a session; they contribute to the
/// searchable text and to the display sort key, not to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Device manufacturer.
    pub manufacturer: Option<String>,
    /// Device type designation.
    pub device_type: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Configuration version of the device.
    pub config_version: Option<String>,
    /// Schema version the device was exported against.
    pub schema_version: Option<String>,
    /// Schema revision.
    pub schema_revision: Option<String>,
    /// Schema release.
    pub schema_release: Option<String>,
}

impl DeviceDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the manufacturer.
    pub fn with_manufacturer(mut self, value: impl Into<String>) -> Self {
        self.manufacturer = Some(value.into());
        self
    }

    /// Sets the device type.
    pub fn with_device_type(mut self, value: impl Into<String>) -> Self {
        self.device_type = Some(value.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Sets the configuration version.
    pub fn with_config_version(mut self, value: impl Into<String>) -> Self {
        self.config_version = Some(value.into());
        self
    }

    /// Sets the schema version/revision/release triple.
    pub fn with_schema(
        mut self,
        version: impl Into<String>,
        revision: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        self.schema_version = Some(version.into());
        self.schema_revision = Some(revision.into());
        self.schema_release = Some(release.into());
        self
    }

    /// Concatenated descriptive text, in field order, absent fields skipped.
    pub fn text(&self) -> String {
        [
            &self.manufacturer,
            &self.device_type,
            &self.description,
            &self.config_version,
            &self.schema_version,
            &self.schema_revision,
            &self.schema_release,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Case-folded sort key for the display surface.
    ///
    /// Sorting is a presentation concern; the session itself never sorts.
    pub fn sort_key(&self) -> String {
        self.text().to_lowercase()
    }
}

/// One entity as supplied by the source store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// The name attribute; doubles as the stable identity for the session.
    pub name: String,
    /// Descriptive metadata.
    #[serde(default)]
    pub descriptor: DeviceDescriptor,
}

impl DeviceRecord {
    /// Creates a record with an empty descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: DeviceDescriptor::default(),
        }
    }

    /// Attaches descriptive metadata.
    pub fn with_descriptor(mut self, descriptor: DeviceDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_text_skips_absent_fields() {
        let descriptor = DeviceDescriptor::new()
            .with_manufacturer("SEL")
            .with_config_version("2.1");
        assert_eq!(descriptor.text(), "SEL 2.1");
    }

    #[test]
    fn test_descriptor_text_field_order() {
        let descriptor = DeviceDescriptor::new()
            .with_manufacturer("Siemens")
            .with_device_type("7SJ85")
            .with_description("Feeder protection")
            .with_schema("2007", "B", "4");
        assert_eq!(descriptor.text(), "Siemens 7SJ85 Feeder protection 2007 B 4");
    }

    #[test]
    fn test_sort_key_is_case_folded() {
        let descriptor = DeviceDescriptor::new().with_manufacturer("ABB");
        assert_eq!(descriptor.sort_key(), "abb");
    }

    #[test]
    fn test_empty_descriptor_text() {
        assert_eq!(DeviceDescriptor::new().text(), "");
    }
}
