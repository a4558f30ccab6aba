//! Tests for the stream validator.

use tagl_core::gpu::record::Record;
use tagl_core::validate::{validate_stream, StreamError, StreamStats};

fn header() -> Record {
    Record::header([0; 7])
}

fn v(x: f32) -> Record {
    Record::vertex([x, 0.0, 0.0], 1.0, [0.0, 0.0], [0; 4])
}

fn eol(x: f32) -> Record {
    v(x).with_last(true)
}

mod accepted {
    use super::*;

    #[test]
    fn empty_stream() {
        assert_eq!(validate_stream(&[]), Ok(StreamStats::default()));
    }

    #[test]
    fn single_strip() {
        let stats = validate_stream(&[header(), v(0.0), v(1.0), eol(2.0)]).expect("valid");
        assert_eq!(
            stats,
            StreamStats {
                headers: 1,
                empty_headers: 0,
                strips: 1,
                vertices: 3,
                duplicate_terminators: 0,
            }
        );
    }

    #[test]
    fn several_strips_under_one_header() {
        let stream = [
            header(),
            v(0.0),
            v(1.0),
            eol(2.0),
            v(3.0),
            v(4.0),
            v(5.0),
            eol(6.0),
        ];
        let stats = validate_stream(&stream).expect("valid");
        assert_eq!(stats.strips, 2);
        assert_eq!(stats.vertices, 7);
    }

    #[test]
    fn repeated_terminator_is_counted_not_rejected() {
        let stream = [header(), v(0.0), v(1.0), eol(2.0), eol(2.0)];
        let stats = validate_stream(&stream).expect("valid");
        assert_eq!(stats.strips, 1);
        assert_eq!(stats.duplicate_terminators, 1);
    }

    #[test]
    fn headers_without_geometry_are_counted() {
        let stream = [header(), header(), v(0.0), v(1.0), eol(2.0), header()];
        let stats = validate_stream(&stream).expect("valid");
        assert_eq!(stats.headers, 3);
        assert_eq!(stats.empty_headers, 2);
    }
}

mod rejected {
    use super::*;

    #[test]
    fn vertex_before_header() {
        assert_eq!(
            validate_stream(&[v(0.0), v(1.0), eol(2.0)]),
            Err(StreamError::MissingHeader { index: 0 })
        );
    }

    #[test]
    fn header_inside_strip() {
        assert_eq!(
            validate_stream(&[header(), v(0.0), v(1.0), header()]),
            Err(StreamError::HeaderInsideStrip { index: 3 })
        );
    }

    #[test]
    fn short_strip() {
        assert_eq!(
            validate_stream(&[header(), v(0.0), eol(1.0)]),
            Err(StreamError::ShortStrip { index: 2, len: 2 })
        );
    }

    #[test]
    fn lone_terminator_is_short() {
        // A different vertex is not a repeat of the previous terminator.
        assert_eq!(
            validate_stream(&[header(), v(0.0), v(1.0), eol(2.0), eol(3.0)]),
            Err(StreamError::ShortStrip { index: 4, len: 1 })
        );
    }

    #[test]
    fn unterminated_strip() {
        assert_eq!(
            validate_stream(&[header(), v(0.0), v(1.0), eol(2.0), v(3.0), v(4.0)]),
            Err(StreamError::UnterminatedStrip { index: 4 })
        );
    }

    #[test]
    fn errors_describe_the_fault() {
        let err = StreamError::ShortStrip { index: 9, len: 2 };
        assert_eq!(err.to_string(), "strip ending at record 9 has only 2 vertices");
    }
}
