mod robot_icon;

pub use robot_icon::RobotIcon;
