pub mod contact;
pub mod ids;
pub mod phone;

pub use contact::{
    edit_address, edit_company, normalize_optional, Address, Company, Contact, ContactDraft,
};
pub use ids::ContactId;
pub use phone::{
    default_dialing_code, dialing_code_index, dialing_codes, filter_local_number, join_phone,
    split_optional_phone, split_phone, DialingCode, SplitPhone, DIALING_CODES,
};
