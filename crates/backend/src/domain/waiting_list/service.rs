use contracts::domain::waiting_list::{SheetSchema, SignupForm};
use thiserror::Error;

use crate::shared::config::SheetsConfig;
use crate::shared::sheets::{SheetsApiClient, SheetsBackend};

/// Failure classes of the submission flow. Handlers map `Config` and
/// `Backend` to the same generic 500; the split exists for logging.
#[derive(Debug, Error)]
pub enum WaitingListError {
    #[error("configuration error: {0}")]
    Config(anyhow::Error),

    #[error("sheets backend error: {0}")]
    Backend(anyhow::Error),
}

/// Append one validated submission to the configured spreadsheet.
///
/// Credentials are resolved and the client authenticated per request, the
/// way the spreadsheet is reached from a stateless handler.
pub async fn submit(form: &SignupForm) -> Result<(), WaitingListError> {
    let config = SheetsConfig::from_env().map_err(WaitingListError::Config)?;
    let client = SheetsApiClient::connect(&config)
        .await
        .map_err(WaitingListError::Backend)?;
    append_submission(&client, &SheetSchema::waiting_list(), form).await
}

/// Core flow against any backend: ensure the header row, then append.
///
/// The header check is read-then-maybe-write and can race with another
/// first-time submission. Both racers write identical headers, so the sheet
/// converges either way; exactly-once header writes are not guaranteed.
pub async fn append_submission(
    backend: &dyn SheetsBackend,
    schema: &SheetSchema,
    form: &SignupForm,
) -> Result<(), WaitingListError> {
    let header_rows = backend
        .get_values(&schema.header_range())
        .await
        .map_err(WaitingListError::Backend)?;

    if header_rows.is_empty() {
        backend
            .update_values(&schema.header_range(), vec![schema.headers()])
            .await
            .map_err(WaitingListError::Backend)?;
    }

    backend
        .append_row(&schema.append_range(), schema.row(form))
        .await
        .map_err(WaitingListError::Backend)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get(String),
        Update(String, Vec<Vec<String>>),
        Append(String, Vec<String>),
    }

    /// Records every values call; configurable header state and append fault.
    struct MockBackend {
        calls: Mutex<Vec<Call>>,
        header_row: Option<Vec<String>>,
        fail_append: bool,
    }

    impl MockBackend {
        fn empty_sheet() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                header_row: None,
                fail_append: false,
            }
        }

        fn with_headers() -> Self {
            Self {
                header_row: Some(vec![
                    "First Name".into(),
                    "Last Name".into(),
                    "Email".into(),
                    "Phone Number".into(),
                    "Ticket".into(),
                ]),
                ..Self::empty_sheet()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SheetsBackend for MockBackend {
        async fn get_values(&self, range: &str) -> anyhow::Result<Vec<Vec<String>>> {
            self.calls.lock().unwrap().push(Call::Get(range.into()));
            Ok(self.header_row.clone().map(|row| vec![row]).unwrap_or_default())
        }

        async fn update_values(
            &self,
            range: &str,
            values: Vec<Vec<String>>,
        ) -> anyhow::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(range.into(), values));
            Ok(())
        }

        async fn append_row(&self, range: &str, row: Vec<String>) -> anyhow::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Append(range.into(), row));
            if self.fail_append {
                anyhow::bail!("quota exceeded for spreadsheet");
            }
            Ok(())
        }
    }

    fn jane() -> SignupForm {
        SignupForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@x.com".into(),
            phone_number: "0821234567".into(),
            ticket: "5km Fun Run".into(),
        }
    }

    #[tokio::test]
    async fn empty_sheet_gets_headers_before_the_row() {
        let backend = MockBackend::empty_sheet();
        let schema = SheetSchema::waiting_list();

        append_submission(&backend, &schema, &jane()).await.unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                Call::Get("Sheet1!A1:E1".into()),
                Call::Update(
                    "Sheet1!A1:E1".into(),
                    vec![vec![
                        "First Name".into(),
                        "Last Name".into(),
                        "Email".into(),
                        "Phone Number".into(),
                        "Ticket".into(),
                    ]],
                ),
                Call::Append(
                    "Sheet1!A:E".into(),
                    vec![
                        "Jane".into(),
                        "Doe".into(),
                        "jane@x.com".into(),
                        "0821234567".into(),
                        "5km Fun Run".into(),
                    ],
                ),
            ]
        );
    }

    #[tokio::test]
    async fn existing_headers_are_left_alone() {
        let backend = MockBackend::with_headers();
        let schema = SheetSchema::waiting_list();

        append_submission(&backend, &schema, &jane()).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Get("Sheet1!A1:E1".into()));
        assert!(matches!(&calls[1], Call::Append(range, _) if range == "Sheet1!A:E"));
    }

    #[tokio::test]
    async fn one_submission_appends_exactly_one_row() {
        let backend = MockBackend::empty_sheet();
        let schema = SheetSchema::waiting_list();

        append_submission(&backend, &schema, &jane()).await.unwrap();

        let appends = backend
            .calls()
            .iter()
            .filter(|call| matches!(call, Call::Append(..)))
            .count();
        assert_eq!(appends, 1);
    }

    #[tokio::test]
    async fn append_failure_surfaces_as_backend_error() {
        let backend = MockBackend {
            fail_append: true,
            ..MockBackend::with_headers()
        };
        let schema = SheetSchema::waiting_list();

        let err = append_submission(&backend, &schema, &jane())
            .await
            .unwrap_err();
        assert!(matches!(err, WaitingListError::Backend(_)));
    }

    #[tokio::test]
    async fn missing_configuration_fails_before_any_backend_call() {
        // The test environment carries no Google credentials, so resolution
        // fails (or, if another test momentarily sets a dummy key, the token
        // exchange fails); either way no spreadsheet is reached and the
        // caller sees a server-side error.
        let err = submit(&jane()).await.unwrap_err();
        assert!(matches!(
            err,
            WaitingListError::Config(_) | WaitingListError::Backend(_)
        ));
    }
}
