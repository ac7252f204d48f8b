pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, section, status, success, summary_row, warn};
pub use table::{artist_table, record_table, single_artist, single_song, song_table, stats_table, TableBuilder};
pub use theme::{theme, Theme};
