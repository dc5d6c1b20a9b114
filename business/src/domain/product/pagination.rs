/// Page metadata derived from a total row count and the paging inputs.
///
/// The inputs are not re-validated here; the boundary layer clamps
/// `page_number >= 1` and `page_size` into `[1, 50]` before this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageMeta {
    pub fn new(total_count: i64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if total_count <= 0 {
            0
        } else {
            total_count.div_ceil(i64::from(page_size)) as u32
        };

        Self {
            total_pages,
            has_previous: page_number > 1,
            has_next: page_number < total_pages,
        }
    }
}
