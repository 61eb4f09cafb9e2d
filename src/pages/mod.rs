mod about;
mod home;
mod homework_help;
mod not_found;
mod onboarding;
mod settings;
mod study;
mod study_groups;

pub use about::AboutPage;
pub use home::HomePage;
pub use homework_help::HomeworkHelpPage;
pub use not_found::NotFoundPage;
pub use onboarding::OnboardingPage;
pub use settings::SettingsPage;
pub use study::StudyPage;
pub use study_groups::StudyGroupsPage;
