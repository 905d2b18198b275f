//! Wire format integration tests

mod codec_tests;
