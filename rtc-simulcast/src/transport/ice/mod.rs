pub(crate) mod candidate;

pub use candidate::RTCIceCandidateInit;
