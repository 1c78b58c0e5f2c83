use uuid::Uuid;

use crate::core::models::{MemeRecord, UploadKind};
use crate::global_constants;

/// Identifies one issued search. Only the most recently issued ticket may
/// settle the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(Uuid);

impl NoticeId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessNotice {
    pub id: NoticeId,
    pub text: String,
}

/// Transient page state: query, results, loading, error and success notice.
#[derive(Debug, Default)]
pub struct MemeBoard {
    query: String,
    results: Vec<MemeRecord>,
    error: Option<String>,
    notice: Option<SuccessNotice>,
    issued_searches: u64,
    pending_search: Option<u64>,
    pending_uploads: usize,
}

impl MemeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[MemeRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success_message(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.text.as_str())
    }

    pub fn pending_uploads(&self) -> usize {
        self.pending_uploads
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued_searches += 1;
        self.pending_search = Some(self.issued_searches);
        self.error = None;

        SearchTicket {
            sequence: self.issued_searches,
            query: self.query.clone(),
        }
    }

    /// Applies a search outcome. Returns `false` when the ticket was
    /// superseded by a newer search, in which case nothing changes.
    pub fn settle_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<MemeRecord>, String>,
    ) -> bool {
        if ticket.sequence != self.issued_searches {
            log::debug!(
                "[MEME_BOARD] Discarding stale search #{} (latest is #{})",
                ticket.sequence,
                self.issued_searches
            );
            return false;
        }

        self.pending_search = None;
        match outcome {
            Ok(records) => {
                self.results = records;
            }
            Err(_) => {
                self.error = Some(global_constants::SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn begin_upload(&mut self, kind: UploadKind) {
        self.pending_uploads += 1;
        log::debug!(
            "[MEME_BOARD] {} upload dispatched, {} in flight",
            kind,
            self.pending_uploads
        );
    }

    /// Applies an upload outcome. On success returns the id of the notice
    /// that was posted so its expiry can be scheduled.
    pub fn settle_upload(
        &mut self,
        kind: UploadKind,
        outcome: Result<(), String>,
    ) -> Option<NoticeId> {
        self.pending_uploads = self.pending_uploads.saturating_sub(1);

        match outcome {
            Ok(()) => {
                let notice = SuccessNotice {
                    id: NoticeId::generate(),
                    text: kind.success_message().to_string(),
                };
                let id = notice.id;
                self.notice = Some(notice);
                Some(id)
            }
            Err(_) => {
                self.reject_upload(kind);
                None
            }
        }
    }

    /// Reports an upload that never reached the server, e.g. an unreadable file.
    pub fn reject_upload(&mut self, kind: UploadKind) {
        self.error = Some(kind.failure_message().to_string());
    }

    /// Clears the success notice if it is still the one identified by `id`.
    pub fn expire_notice(&mut self, id: NoticeId) -> bool {
        match &self.notice {
            Some(notice) if notice.id == id => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}
