//! Full read pipeline: extract a window, decode it, scale it

use crate::decoder::Decoder;
use crate::error::Result;
use crate::transform::{transform, ProcessedValue, ScaleParameters};
use crate::variant::Variant;
use crate::window::{Segments, Window};
use serde::Serialize;
use tracing::trace;

/// One decoded measurement and everything needed to display it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading<'a> {
    pub segments: Segments<'a>,
    pub window: Window,
    pub variant: Variant,
    pub decoded: i64,
    pub processed: ProcessedValue,
}

impl<'a> Reading<'a> {
    pub fn decode(
        decoder: &Decoder,
        message: &'a str,
        window: Window,
        variant: Variant,
        params: &ScaleParameters,
    ) -> Result<Self> {
        let segments = window.split(message)?;
        let decoded = decoder.decode(variant, segments.window)?;
        let processed = transform(decoded, params)?;

        trace!(
            start = window.start(),
            width = window.width(),
            variant = %variant,
            raw = segments.window,
            decoded,
            processed = %processed,
            "reading"
        );

        Ok(Self {
            segments,
            window,
            variant,
            decoded,
            processed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, DecodeError, TransformError};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_default_message_reading() {
        let decoder = Decoder::ascii_6bit();
        let params = ScaleParameters::new(100.0, 1.0, 0.0, 2);
        let reading = Reading::decode(
            &decoder,
            "`BST@Ff@Ffj",
            Window::new(4, 3).unwrap(),
            Variant::Positive,
            &params,
        )
        .unwrap();

        assert_eq!(reading.segments.window, "@Ff");
        assert_eq!(reading.decoded, 422);
        assert_eq!(reading.processed.text, "4.22");
        assert!(logs_contain("reading"));
    }

    #[test]
    fn test_errors_surface_by_stage() {
        let decoder = Decoder::ascii_6bit();
        let params = ScaleParameters::default();

        let err = Reading::decode(
            &decoder,
            "@@",
            Window::new(1, 2).unwrap(),
            Variant::Positive,
            &params,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::Decode(DecodeError::WindowOutOfBounds { .. })
        ));

        let err = Reading::decode(
            &decoder,
            "@1",
            Window::new(0, 2).unwrap(),
            Variant::Signed,
            &params,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CodecError::Decode(DecodeError::InvalidCharacter {
                character: '1',
                position: 1
            })
        );

        let zero_divider = ScaleParameters::new(0.0, 1.0, 0.0, 2);
        let err = Reading::decode(
            &decoder,
            "@A",
            Window::new(0, 2).unwrap(),
            Variant::Positive,
            &zero_divider,
        )
        .unwrap_err();
        assert_eq!(err, CodecError::Transform(TransformError::DivisionByZero));
    }

    #[test]
    fn test_reading_serializes_for_json_output() {
        let decoder = Decoder::ascii_6bit();
        let reading = Reading::decode(
            &decoder,
            "AB?",
            Window::new(2, 1).unwrap(),
            Variant::Signed,
            &ScaleParameters::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["segments"]["before"], "AB");
        assert_eq!(json["variant"], "signed");
        assert_eq!(json["decoded"], -1);
        assert_eq!(json["processed"]["text"], "-1.00");
    }
}
