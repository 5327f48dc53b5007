mod menu_vm;
mod quiz_vm;
mod result_vm;
mod time_fmt;

pub use menu_vm::{
    DifficultyButtonVm, MenuVm, NoticeVm, SectionCardVm, StartSelection, SubjectChipVm, map_menu,
};
pub use quiz_vm::{FeedbackVm, OptionStyle, OptionVm, QuizVm, URGENT_SECONDS, map_quiz};
pub use result_vm::{ResultVm, map_result};
pub use time_fmt::{format_countdown, format_datetime};
