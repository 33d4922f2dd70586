use reqwest::StatusCode;
use std::fmt;

/// Status codes a call may return without failing the test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedStatus(Vec<StatusCode>);

impl ExpectedStatus {
    pub fn contains(&self, status: StatusCode) -> bool {
        self.0.contains(&status)
    }

    pub fn codes(&self) -> &[StatusCode] {
        &self.0
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.0.iter().map(|s| s.as_u16().to_string()).collect();
        write!(f, "[{}]", codes.join(", "))
    }
}

impl From<StatusCode> for ExpectedStatus {
    fn from(status: StatusCode) -> Self {
        ExpectedStatus(vec![status])
    }
}

impl From<u16> for ExpectedStatus {
    fn from(code: u16) -> Self {
        ExpectedStatus::from(&[code][..])
    }
}

impl From<&[u16]> for ExpectedStatus {
    fn from(codes: &[u16]) -> Self {
        ExpectedStatus(
            codes
                .iter()
                // an out-of-range code can never match a real response
                .filter_map(|c| StatusCode::from_u16(*c).ok())
                .collect(),
        )
    }
}

impl<const N: usize> From<[u16; N]> for ExpectedStatus {
    fn from(codes: [u16; N]) -> Self {
        ExpectedStatus::from(&codes[..])
    }
}
