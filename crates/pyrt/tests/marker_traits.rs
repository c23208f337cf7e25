use pyrt::{Dict, PyError, Value};
use static_assertions::assert_impl_all;

assert_impl_all!(Value: Send, Sync, Clone, Default, Eq, Ord, std::hash::Hash);
assert_impl_all!(Dict: Send, Sync);
assert_impl_all!(PyError: Send, Sync, std::error::Error);
