pub mod providers;
pub mod video_lookup;

pub use video_lookup::VideoLookupService;
