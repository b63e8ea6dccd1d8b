pub mod stats_txt;
