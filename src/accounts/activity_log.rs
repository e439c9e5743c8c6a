use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::MockBackend;

/// Outcome flag attached to a [`LogEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// The logged event completed.
    Success,
    /// The logged event was rejected.
    Failed,
}

/// A single entry of the account activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// What happened.
    pub event: String,
    /// Origin address of the event.
    pub ip: String,
    /// Browser and operating system the event came from.
    pub device: String,
    /// Human-readable display time, as a dashboard would show it.
    pub time: String,
    /// Whether the event succeeded.
    pub status: LogStatus,
}

impl LogEntry {
    fn demo(event: &str, ip: &str, device: &str, time: &str, status: LogStatus) -> Self {
        Self {
            event: event.to_string(),
            ip: ip.to_string(),
            device: device.to_string(),
            time: time.to_string(),
            status,
        }
    }
}

impl MockBackend {
    /// Retrieves the recent activity feed for the signed-in account.
    ///
    /// Requires an active session. The feed is canned demo data: the same
    /// four entries come back for every account, newest first; no real
    /// activity is recorded anywhere.
    ///
    /// # Example
    /// ```rust,ignore
    /// let entries = backend.activity_log().await?;
    ///
    /// for entry in entries {
    ///     println!("{} from {} ({})", entry.event, entry.ip, entry.time);
    /// }
    /// ```
    pub async fn activity_log(&self) -> Result<Vec<LogEntry>, SessionError> {
        tokio::time::sleep(self.latency.request).await;

        if self.token().is_none() {
            return Err(SessionError::Unauthorized);
        }

        Ok(vec![
            LogEntry::demo(
                "Login Successful",
                "192.168.1.104",
                "Chrome / MacOS",
                "Today, 10:45 AM",
                LogStatus::Success,
            ),
            LogEntry::demo(
                "Token Rotation",
                "192.168.1.104",
                "Chrome / MacOS",
                "Today, 10:30 AM",
                LogStatus::Success,
            ),
            LogEntry::demo(
                "API Access",
                "192.168.1.104",
                "Chrome / MacOS",
                "Today, 09:15 AM",
                LogStatus::Success,
            ),
            LogEntry::demo(
                "Failed Login Attempt",
                "45.12.19.2",
                "Firefox / Linux",
                "Yesterday, 11:20 PM",
                LogStatus::Failed,
            ),
        ])
    }
}
