use trakr::config::Config;
use trakr::store::TaskStore;

use iced::widget::{button, checkbox, column, container, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

pub fn main() -> iced::Result {
    if std::env::var("TRAKR_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("trakr=debug")
            .init();
    }

    iced::application("Task Tracker", TrakrGui::update, TrakrGui::view)
        .theme(TrakrGui::theme)
        .run_with(TrakrGui::new)
}

struct TrakrGui {
    store: TaskStore,
    input_value: String,
    dark_mode: bool,
    error_msg: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    InputChanged(String),
    CreateTask,
    ToggleTask(u64),
    ToggleTheme,
}

impl TrakrGui {
    fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_default();
        let store = TaskStore::open(config.data_file());
        (
            Self {
                store,
                input_value: String::new(),
                dark_mode: false,
                error_msg: None,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input_value = value;
            }

            Message::CreateTask => {
                let value = self.input_value.clone();
                // The field clears whether or not the add goes through.
                self.input_value.clear();
                match self.store.add_task(&value) {
                    Ok(_) => self.error_msg = None,
                    Err(e) => self.error_msg = Some(format!("Save failed: {}", e)),
                }
            }

            Message::ToggleTask(id) => {
                if let Err(e) = self.store.toggle_task(id) {
                    self.error_msg = Some(format!("Save failed: {}", e));
                }
            }

            Message::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let title_text = if let Some(err) = &self.error_msg {
            err.as_str()
        } else {
            "Task Tracker"
        };

        let theme_btn = button(text(if self.dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        }))
        .on_press(Message::ToggleTheme)
        .padding(8);

        let header = row![text(title_text).size(32), theme_btn]
            .spacing(20)
            .align_y(iced::Alignment::Center);

        let input = text_input("What do you need to do?", &self.input_value)
            .on_input(Message::InputChanged)
            .on_submit(Message::CreateTask)
            .padding(10)
            .size(20);
        let add_btn = button(text("Add")).on_press(Message::CreateTask).padding(10);
        let input_row = row![input, add_btn].spacing(10);

        let body: Element<_> = if self.store.is_empty() {
            column![
                text("No tasks yet").size(24),
                text("Add your first task and stay productive...").size(16),
            ]
            .spacing(5)
            .into()
        } else {
            column(
                self.store
                    .tasks()
                    .iter()
                    .map(|task| {
                        let status_color = if task.completed {
                            iced::Color::from_rgb(0.2, 0.7, 0.3)
                        } else {
                            iced::Color::from_rgb(0.9, 0.6, 0.1)
                        };
                        let id = task.id;
                        row![
                            checkbox("", task.completed).on_toggle(move |_| Message::ToggleTask(id)),
                            text(&task.title).size(20),
                            text(task.status_label()).size(14).color(status_color),
                        ]
                        .spacing(10)
                        .align_y(iced::Alignment::Center)
                        .into()
                    })
                    .collect::<Vec<_>>(),
            )
            .spacing(10)
            .into()
        };

        let content = column![header, input_row, scrollable(body)]
            .spacing(20)
            .max_width(800);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(20)
            .into()
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
