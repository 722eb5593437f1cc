/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
}

impl PageRequest {
    /// Returns `None` for page 0 or a zero page size.
    pub fn new(number: u64, size: u64) -> Option<Self> {
        (number >= 1 && size >= 1).then_some(Self { number, size })
    }

    pub fn first(size: u64) -> Self {
        Self {
            number: 1,
            size: size.max(1),
        }
    }

    /// Zero-based index used by the storage layer.
    pub fn index(&self) -> u64 {
        self.number - 1
    }
}

/// One page of results plus the size of the whole result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn num_pages(&self) -> u64 {
        self.total.div_ceil(self.request.size)
    }

    /// An empty result set still has a valid (empty) first page.
    pub fn is_out_of_range(&self) -> bool {
        self.request.number > self.num_pages().max(1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.request.number < self.num_pages()).then(|| self.request.number + 1)
    }

    pub fn previous_page(&self) -> Option<u64> {
        (self.request.number > 1).then(|| self.request.number - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }
}
