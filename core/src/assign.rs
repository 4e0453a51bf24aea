use std::fmt::Display;

use tracing::{debug, trace};

/// A two-state container: present or absent.
pub trait Presence {
  fn is_present(&self) -> bool;
}

/// Replaces `target` with the decoded container in `result` if decoding succeeded. On failure `target` is left as it
/// was and the error is returned.
pub fn assign_from<O: Presence, E: Display>(target: &mut O, result: Result<O, E>) -> Result<(), E> {
  match result {
    Ok(decoded) => {
      trace!(present = decoded.is_present(), "assigning decoded optional");
      *target = decoded;
      Ok(())
    }
    Err(cause) => {
      debug!(%cause, present = target.is_present(), "decoding optional failed; keeping previous value");
      Err(cause)
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[derive(PartialEq, Debug)]
  struct Flag(Option<u8>);

  impl Presence for Flag {
    fn is_present(&self) -> bool { self.0.is_some() }
  }

  #[test]
  fn success_replaces() {
    let mut flag = Flag(Some(1));
    assert_eq!(assign_from(&mut flag, Ok::<_, String>(Flag(None))), Ok(()));
    assert_eq!(flag, Flag(None));
  }

  #[test]
  fn failure_preserves() {
    let mut flag = Flag(Some(1));
    assert_eq!(assign_from(&mut flag, Err("bad value".to_string())), Err("bad value".to_string()));
    assert_eq!(flag, Flag(Some(1)));
  }
}
