// Role taxonomy: the exclusive category classifier, the inclusive roadmap
// tagger, and prep-guide tiering. The two classifiers stay separate on
// purpose; their matching semantics differ (one bucket vs. a tag set).

pub mod categories;
pub mod handlers;
pub mod prep;
pub mod roadmaps;
