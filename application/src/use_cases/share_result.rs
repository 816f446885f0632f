//! Share Result use case
//!
//! The result screen's share buttons. Each action returns the toast to show,
//! if any.

use crate::ports::share::{ShareError, SharePayload, ShareTarget};
use persona_domain::Recommendation;
use std::sync::Arc;
use tracing::{debug, warn};

/// Title handed to the native share sheet
pub const SHARE_TITLE: &str = "오늘의 커피";

const COPIED: &str = "링크가 클립보드에 복사되었습니다.";
const COPIED_FOR_STORY: &str = "링크가 복사되었습니다! 인스타그램 스토리에 공유해보세요.";
const COPIED_FOR_MESSENGER: &str = "링크가 복사되었습니다! 카카오톡에 붙여넣기 해보세요.";
const COPY_FAILED: &str = "링크 복사에 실패했습니다.";
const SHARE_UNSUPPORTED: &str = "이 환경은 공유 기능을 지원하지 않습니다.";

/// A share button on the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareAction {
    /// Copy the share link
    CopyLink,
    /// Copy the link for pasting into a story
    StoryLink,
    /// Open the native share sheet, copying the link when there is none
    NativeShare,
}

/// Text shared alongside the link
pub fn share_text(recommendation: &Recommendation) -> String {
    format!(
        "[오늘의 커피] 오늘 나에게 딱 맞는 커피는? ☕\n\n{}: \"{}\"\n\n추천 받으러 가기 👇",
        recommendation.coffee_name, recommendation.tagline
    )
}

pub struct ShareResultUseCase {
    target: Arc<dyn ShareTarget>,
    share_url: String,
}

impl ShareResultUseCase {
    pub fn new(target: Arc<dyn ShareTarget>, share_url: impl Into<String>) -> Self {
        Self {
            target,
            share_url: share_url.into(),
        }
    }

    /// Perform `action` and return the toast message, if one should be shown
    pub fn execute(&self, action: ShareAction, recommendation: &Recommendation) -> Option<String> {
        match action {
            ShareAction::CopyLink => Some(match self.copy() {
                Ok(()) => COPIED.to_string(),
                Err(_) => format!("링크를 복사해주세요: {}", self.share_url),
            }),
            ShareAction::StoryLink => Some(match self.copy() {
                Ok(()) => COPIED_FOR_STORY.to_string(),
                Err(_) => COPY_FAILED.to_string(),
            }),
            ShareAction::NativeShare => self.native_share(recommendation),
        }
    }

    fn copy(&self) -> Result<(), ShareError> {
        self.target.copy_to_clipboard(&self.share_url).inspect_err(|e| {
            warn!("Clipboard write failed: {}", e);
        })
    }

    fn native_share(&self, recommendation: &Recommendation) -> Option<String> {
        let payload = SharePayload {
            title: SHARE_TITLE.to_string(),
            text: share_text(recommendation),
            url: self.share_url.clone(),
        };

        match self.target.share(&payload) {
            Ok(()) => None,
            Err(ShareError::Cancelled) => {
                debug!("Share cancelled");
                None
            }
            Err(ShareError::Unsupported) => Some(match self.copy() {
                Ok(()) => COPIED_FOR_MESSENGER.to_string(),
                Err(_) => SHARE_UNSUPPORTED.to_string(),
            }),
            Err(e) => {
                warn!("Share failed: {}", e);
                None
            }
        }
    }
}
