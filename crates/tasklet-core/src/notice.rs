use std::fmt;

use tracing::trace;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "timer-{}", self.0)
  }
}

#[derive(Debug, Default)]
pub struct TimerIds {
  next: u64
}

impl TimerIds {
  pub fn allocate(&mut self) -> TimerId {
    self.next += 1;
    TimerId(self.next)
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NoticeKind {
  Filter,
  Theme
}

impl NoticeKind {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Filter => "filter-message",
      | Self::Theme => "theme-message"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Notice {
  pub timer: TimerId,
  pub kind:  NoticeKind,
  pub text:  String
}

// Oldest first. Each notice is removed only
// by its own timer.
#[derive(Debug, Default)]
pub struct NoticeBoard {
  notices: Vec<Notice>
}

impl NoticeBoard {
  pub fn push(
    &mut self,
    timer: TimerId,
    kind: NoticeKind,
    text: String
  ) {
    trace!(%timer, ?kind, %text, "notice posted");
    self.notices.push(Notice {
      timer,
      kind,
      text
    });
  }

  pub fn expire(
    &mut self,
    timer: TimerId
  ) -> Option<Notice> {
    let idx = self
      .notices
      .iter()
      .position(|notice| notice.timer == timer)?;
    let notice = self.notices.remove(idx);
    trace!(%timer, "notice expired");
    Some(notice)
  }

  pub fn notices(&self) -> &[Notice] {
    &self.notices
  }

  pub fn is_empty(&self) -> bool {
    self.notices.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::{
    NoticeBoard,
    NoticeKind,
    TimerIds
  };

  #[test]
  fn timers_are_unique() {
    let mut ids = TimerIds::default();
    let a = ids.allocate();
    let b = ids.allocate();
    assert_ne!(a, b);
  }

  #[test]
  fn expiry_removes_only_its_notice() {
    let mut ids = TimerIds::default();
    let mut board = NoticeBoard::default();
    let first = ids.allocate();
    let second = ids.allocate();
    board.push(
      first,
      NoticeKind::Theme,
      "Switched to dark mode".to_string()
    );
    board.push(
      second,
      NoticeKind::Theme,
      "Switched to light mode".to_string()
    );

    let removed =
      board.expire(first).expect("expire");
    assert_eq!(removed.text, "Switched to dark mode");
    assert_eq!(board.notices().len(), 1);
    assert_eq!(board.notices()[0].timer, second);

    assert!(board.expire(first).is_none());
  }
}
