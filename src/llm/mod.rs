pub mod llm_interface;
pub mod mentorpiece_llm;
pub mod mock_llm;
pub mod llm_factory;

pub use llm_interface::*;
pub use mentorpiece_llm::*;
pub use mock_llm::*;
pub use llm_factory::*;
