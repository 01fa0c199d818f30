pub mod viewdata;
