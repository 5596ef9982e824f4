/// Word segmentation for runs of Thai script, which carry no inter-word spaces.
///
/// Implementations receive a run that contains only Thai characters and return
/// the raw word candidates in document order. Cleaning and stop-word filtering
/// happen downstream, so a segmenter never needs to know the filter mode.
pub trait ThaiSegmenter: Send + Sync {
    fn name(&self) -> &'static str;
    fn segment(&self, run: &str) -> Vec<String>;
}
