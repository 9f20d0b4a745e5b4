use compact_str::CompactString;
use ferrous_stub_domain::RecordType;
use std::fmt;

/// Cache identity of a query. The domain is kept exactly as the caller
/// wrote it; `Example.TEST` and `example.test` are separate entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: CompactString::from(domain),
            record_type,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.record_type)
    }
}
