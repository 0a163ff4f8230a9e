pub mod assignment;
pub mod confirm_dialog;
pub mod data_table;
pub mod dynamic_form;
pub mod dynamic_table;
pub mod field_input;
pub mod pagination_controls;
pub mod search_input;
pub mod section_list;
pub mod ui;

pub use assignment::{Assignment, AssignmentLabels};
pub use confirm_dialog::{ConfirmDialog, ConfirmRequest};
pub use data_table::DynamicDataTable;
pub use dynamic_form::DynamicForm;
pub use dynamic_table::{Column, DeleteSpec, DynamicTable};
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use section_list::SectionList;
