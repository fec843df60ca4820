use log::debug;

use crate::media::{Carrier, Codec, CodecOptions, Conceal, Method};
use crate::result::Result;

/// The state a host keeps around a loaded image: the current carrier and the selected method.
///
/// Codecs never hold state, everything that changes over time lives here and is
/// replaced wholesale, an applied message swaps in the freshly encoded carrier.
#[derive(Debug, Clone)]
pub struct Session {
    carrier: Carrier,
    codec: Codec,
}

impl Session {
    pub fn new(carrier: Carrier, options: CodecOptions) -> Self {
        Self {
            carrier,
            codec: options.into(),
        }
    }

    pub fn method(&self) -> Method {
        self.codec.method()
    }

    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    pub fn into_carrier(self) -> Carrier {
        self.carrier
    }

    /// Replaces the loaded carrier, e.g. when another image was picked,
    /// and unveils what the selected method finds in it
    pub fn load(&mut self, carrier: Carrier) -> Option<String> {
        self.carrier = carrier;
        self.unveil()
    }

    /// The message the selected method finds in the current carrier
    pub fn unveil(&self) -> Option<String> {
        let message = self.codec.unveil(&self.carrier);
        debug!(
            "{:?} unveil found {}",
            self.method(),
            if message.is_some() { "a message" } else { "nothing" }
        );
        message
    }

    /// Switches the method and unveils with it, the current carrier is not touched
    pub fn switch_to(&mut self, options: CodecOptions) -> Option<String> {
        self.codec = options.into();
        self.unveil()
    }

    /// Message capacity of the current carrier in bytes, `None` if unlimited
    pub fn capacity(&self) -> Option<usize> {
        self.codec.capacity(&self.carrier)
    }

    /// Hides `text` without replacing the current carrier,
    /// so every preview starts from the same base
    pub fn preview(&self, text: &str) -> Result<Carrier> {
        self.codec.hide(&self.carrier, text)
    }

    /// Hides `text`, keeps the result as the current carrier and
    /// returns what unveiling it yields
    pub fn apply(&mut self, text: &str) -> Result<Option<String>> {
        self.carrier = self.codec.hide(&self.carrier, text)?;

        Ok(self.unveil())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImcypherError;
    use crate::test_utils::prepare_carrier;

    #[test]
    fn should_find_nothing_in_a_plain_image() {
        let session = Session::new(prepare_carrier(8, 8), CodecOptions::default());

        assert_eq!(session.method(), Method::Lsb);
        assert_eq!(session.unveil(), None);
        assert_eq!(session.capacity(), Some(24));
    }

    #[test]
    fn should_apply_and_confirm_the_message() {
        let mut session = Session::new(prepare_carrier(8, 8), CodecOptions::default());

        let confirmed = session.apply("Hello").expect("Cannot apply message");

        assert_eq!(confirmed.as_deref(), Some("Hello"));
        assert_eq!(session.unveil().as_deref(), Some("Hello"));
    }

    #[test]
    fn should_preview_without_replacing_the_carrier() {
        let original = prepare_carrier(8, 8);
        let session = Session::new(original.clone(), CodecOptions::default());

        let first = session.preview("one").expect("Cannot preview");
        let second = session.preview("one").expect("Cannot preview");

        assert_eq!(first, second);
        assert_eq!(session.carrier(), &original);
        assert_eq!(session.unveil(), None);
    }

    #[test]
    fn should_rerun_unveil_when_switching_methods() {
        let mut session = Session::new(
            prepare_carrier(8, 8),
            CodecOptions::from(Method::Append),
        );
        session.apply("behind the image").expect("Cannot append");

        assert_eq!(session.switch_to(CodecOptions::from(Method::Lsb)), None);
        assert_eq!(session.capacity(), Some(24));
        assert_eq!(
            session.switch_to(CodecOptions::from(Method::Append)).as_deref(),
            Some("behind the image")
        );
        assert_eq!(session.capacity(), None);
    }

    #[test]
    fn should_keep_the_carrier_when_the_message_does_not_fit() {
        let original = prepare_carrier(2, 2);
        let mut session = Session::new(original.clone(), CodecOptions::default());

        match session.apply("too long") {
            Err(ImcypherError::CapacityExceeded { needed: 9, available: 1 }) => (),
            r => panic!("unexpected result {r:?}"),
        }
        assert_eq!(session.carrier(), &original);
    }

    #[test]
    fn should_unveil_on_load() {
        let mut session = Session::new(prepare_carrier(8, 8), CodecOptions::from(Method::Append));
        let with_message = session.preview("loaded").expect("Cannot preview");

        assert_eq!(session.load(with_message).as_deref(), Some("loaded"));
    }
}
