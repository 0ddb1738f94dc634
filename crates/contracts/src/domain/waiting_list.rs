use serde::{Deserialize, Serialize};

// ============================================================================
// Signup Submission
// ============================================================================

/// Field tags for the signup form.
///
/// Both sides address form fields through this enum instead of stringly-typed
/// keys: the frontend dispatches input events by tag, the sheet schema maps
/// tags to column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Ticket,
}

impl SignupField {
    pub const ALL: [SignupField; 5] = [
        SignupField::FirstName,
        SignupField::LastName,
        SignupField::Email,
        SignupField::PhoneNumber,
        SignupField::Ticket,
    ];
}

/// One waiting-list submission as it travels over the wire.
///
/// Missing JSON keys deserialize to empty strings so the endpoint can answer
/// with its own 400 instead of a framework rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SignupForm {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,

    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    pub ticket: String,
}

impl SignupForm {
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::PhoneNumber => &self.phone_number,
            SignupField::Ticket => &self.ticket,
        }
    }

    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::Email => self.email = value,
            SignupField::PhoneNumber => self.phone_number = value,
            SignupField::Ticket => self.ticket = value,
        }
    }

    /// All required fields filled in (whitespace does not count).
    pub fn is_complete(&self) -> bool {
        SignupField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

// ============================================================================
// Sheet column layout
// ============================================================================

/// Column layout of the waiting-list sheet as data: field order and header
/// labels in one place, ranges derived from the column count.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    sheet: &'static str,
    columns: Vec<(SignupField, &'static str)>,
}

impl SheetSchema {
    /// The canonical waiting-list layout: one column per signup field.
    pub fn waiting_list() -> Self {
        Self {
            sheet: "Sheet1",
            columns: vec![
                (SignupField::FirstName, "First Name"),
                (SignupField::LastName, "Last Name"),
                (SignupField::Email, "Email"),
                (SignupField::PhoneNumber, "Phone Number"),
                (SignupField::Ticket, "Ticket"),
            ],
        }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|(_, header)| header.to_string())
            .collect()
    }

    /// A1-notation range of the header row, e.g. "Sheet1!A1:E1".
    pub fn header_range(&self) -> String {
        format!("{}!A1:{}1", self.sheet, self.last_column())
    }

    /// A1-notation column range rows are appended after, e.g. "Sheet1!A:E".
    pub fn append_range(&self) -> String {
        format!("{}!A:{}", self.sheet, self.last_column())
    }

    /// One sheet row for a submission, in column order.
    pub fn row(&self, form: &SignupForm) -> Vec<String> {
        self.columns
            .iter()
            .map(|(field, _)| form.get(*field).to_string())
            .collect()
    }

    fn last_column(&self) -> char {
        (b'A' + self.columns.len() as u8 - 1) as char
    }
}

// ============================================================================
// API envelopes
// ============================================================================

/// Success body of the waiting-list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Failure body; one generic message per failure class, never backend detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
