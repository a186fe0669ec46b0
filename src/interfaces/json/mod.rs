pub mod fixture_writer;
