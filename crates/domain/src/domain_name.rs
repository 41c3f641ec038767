use crate::DomainError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// Maximum length of a label on the wire (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of an encoded name, length octets and root label included.
pub const MAX_NAME_LEN: usize = 255;

/// An absolute (fully-qualified) domain name, always stored with its trailing
/// dot, e.g. `"example.com."`. The root is `"."`.
///
/// Equality and hashing ignore ASCII case, so `Example.COM.` and `example.com.`
/// are the same name. The original spelling is kept for display.
#[derive(Clone)]
pub struct DomainName(Arc<str>);

impl DomainName {
    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    /// Builds a name from its labels, root label excluded.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut wire_len = 1;

        for label in labels {
            let label = label.as_ref();
            validate_label(label)?;
            wire_len += label.len() + 1;
            text.push_str(label);
            text.push('.');
        }

        if wire_len > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "name is {} octets long, limit is {}",
                wire_len, MAX_NAME_LEN
            )));
        }

        if text.is_empty() {
            return Ok(Self::root());
        }

        Ok(Self(Arc::from(text)))
    }

    /// Builds a name from raw wire labels, root label excluded.
    ///
    /// Labels may hold any octets. Only the 63 and 255 octet limits are
    /// checked. Octets outside printable ASCII, and `.` or `\` inside a
    /// label, are written in `\DDD` form.
    pub fn from_wire_labels<I, B>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut text = String::new();
        let mut wire_len = 1;

        for label in labels {
            let label = label.as_ref();
            if label.is_empty() || label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "wire label of {} octets, limit is {}",
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            wire_len += label.len() + 1;
            for &byte in label {
                match byte {
                    b'.' | b'\\' => text.push_str(&format!("\\{:03}", byte)),
                    0x21..=0x7E => text.push(byte as char),
                    _ => text.push_str(&format!("\\{:03}", byte)),
                }
            }
            text.push('.');
        }

        if wire_len > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "name is {} octets long, limit is {}",
                wire_len, MAX_NAME_LEN
            )));
        }

        if text.is_empty() {
            return Ok(Self::root());
        }

        Ok(Self(Arc::from(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    /// Host form without the trailing dot, as accepted by the system resolver.
    pub fn to_host_string(&self) -> String {
        if self.is_root() {
            return String::new();
        }
        self.0.trim_end_matches('.').to_string()
    }

}

fn validate_label(label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "empty label".to_string(),
        ));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "label '{}' is {} octets long, limit is {}",
            label,
            label.len(),
            MAX_LABEL_LEN
        )));
    }
    if let Some(c) = label
        .chars()
        .find(|c| *c == '.' || !c.is_ascii() || c.is_ascii_whitespace() || c.is_ascii_control())
    {
        return Err(DomainError::InvalidDomainName(format!(
            "label '{}' contains invalid character {:?}",
            label, c
        )));
    }
    Ok(())
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Ok(Self::root());
        }

        let relative = trimmed.strip_suffix('.').unwrap_or(trimmed);
        Self::from_labels(relative.split('.')).map_err(|e| match e {
            DomainError::InvalidDomainName(reason) => {
                DomainError::InvalidDomainName(format!("'{}': {}", s, reason))
            }
            other => other,
        })
    }
}

impl PartialEq for DomainName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for DomainName {}

impl Hash for DomainName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainName({})", self.0)
    }
}
