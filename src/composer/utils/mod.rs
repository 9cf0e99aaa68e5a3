pub mod dates;
pub mod goal_fields;
pub mod html;
pub mod icons;

pub use goal_fields::{
    description_of, icon_of, order_of, prepare_goals, title_of, GoalView, GoalsOptions,
};
pub use icons::{resolve_goal_icon, GoalIcon, NamedIcon, SocialPlatform};
