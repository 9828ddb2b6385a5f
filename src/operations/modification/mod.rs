mod translate_segment;

pub use translate_segment::TranslateSegment;
