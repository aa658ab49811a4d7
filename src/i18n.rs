//! Two-locale string table and locale-aware date formatting.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ru,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

// (key, en, ru)
const STRINGS: &[(&str, &str, &str)] = &[
    // Landing navigation and hero
    ("landing.nav.projects", "Projects", "Проекты"),
    ("landing.nav.about", "About", "О нас"),
    ("landing.brand.hero.title", "We build products", "Мы создаём продукты"),
    ("landing.brand.hero.titleAccent", "that save your time", "которые экономят ваше время"),
    (
        "landing.brand.hero.subtitle",
        "Saturway is a studio of practical projects: an AI organizer for everyday life and a car rental business in Thailand.",
        "Saturway — студия практичных проектов: ИИ-органайзер для повседневной жизни и прокат автомобилей в Таиланде.",
    ),
    ("landing.brand.hero.cta", "Explore projects", "Смотреть проекты"),
    ("landing.brand.hero.demo", "Try the demo", "Попробовать демо"),
    ("landing.brand.stats.activeProjects", "Active projects", "Активных проекта"),
    ("landing.brand.stats.stage", "Stage", "Стадия"),
    ("landing.brand.stats.founded", "Founded", "Основан"),
    // Projects
    ("landing.projects.title", "Our projects", "Наши проекты"),
    ("landing.projects.subtitle", "Two directions, one philosophy", "Два направления, одна философия"),
    ("landing.projects.active", "Active", "Активен"),
    ("landing.projects.viewDetails", "View details", "Подробнее"),
    ("landing.projects.aiOrganizer.name", "AI Organizer", "ИИ-органайзер"),
    ("landing.projects.aiOrganizer.category", "Productivity", "Продуктивность"),
    (
        "landing.projects.aiOrganizer.shortDesc",
        "A Telegram assistant that plans your day",
        "Telegram-ассистент, который планирует ваш день",
    ),
    (
        "landing.projects.aiOrganizer.fullDesc",
        "The organizer turns messages into tasks, reminds you at the right time and reviews your week with you.",
        "Органайзер превращает сообщения в задачи, напоминает вовремя и помогает подвести итоги недели.",
    ),
    ("landing.projects.aiOrganizer.feature1", "Tasks from plain messages", "Задачи из обычных сообщений"),
    ("landing.projects.aiOrganizer.feature2", "Smart reminders", "Умные напоминания"),
    ("landing.projects.aiOrganizer.feature3", "Daily planning", "Планирование дня"),
    ("landing.projects.aiOrganizer.feature4", "Weekly review", "Еженедельный обзор"),
    ("landing.projects.aiOrganizer.feature5", "Priorities and focus", "Приоритеты и фокус"),
    ("landing.projects.aiOrganizer.feature6", "Works inside Telegram", "Работает внутри Telegram"),
    ("landing.projects.thailandCar.name", "Thailand My Car", "Thailand My Car"),
    ("landing.projects.thailandCar.category", "Car rental", "Аренда авто"),
    (
        "landing.projects.thailandCar.shortDesc",
        "Car rental in Pattaya for travellers",
        "Прокат автомобилей в Паттайе для путешественников",
    ),
    (
        "landing.projects.thailandCar.fullDesc",
        "A rental service built around tourist flows from the Gulf, China and Europe, with event partnerships for growth.",
        "Сервис аренды, построенный вокруг туристических потоков из Персидского залива, Китая и Европы, с партнёрствами на мероприятиях для роста.",
    ),
    ("landing.projects.thailandCar.feature1", "Delivery to the hotel", "Доставка к отелю"),
    ("landing.projects.thailandCar.feature2", "Transparent pricing", "Прозрачные цены"),
    ("landing.projects.thailandCar.feature3", "Support in your language", "Поддержка на вашем языке"),
    ("landing.projects.thailandCar.feature4", "New Toyota fleet", "Новый парк Toyota"),
    ("landing.projects.thailandCar.feature5", "Online booking", "Онлайн-бронирование"),
    ("landing.projects.thailandCar.feature6", "Insurance included", "Страховка включена"),
    ("landing.projects.metrics.status", "Status", "Статус"),
    ("landing.projects.metrics.stage", "Stage", "Стадия"),
    ("landing.projects.metrics.platform", "Platform", "Платформа"),
    ("landing.projects.metrics.users", "Users", "Пользователи"),
    ("landing.projects.metrics.location", "Location", "Локация"),
    ("landing.projects.metrics.business", "Business", "Бизнес"),
    ("landing.projects.metrics.launch", "Launch", "Запуск"),
    ("landing.projects.modal.about", "About the project", "О проекте"),
    ("landing.projects.modal.keyFeatures", "Key features", "Ключевые возможности"),
    ("landing.projects.modal.openTelegram", "Open in Telegram", "Открыть в Telegram"),
    ("landing.projects.modal.goToProject", "Go to project", "Перейти к проекту"),
    ("landing.projects.modal.comingSoon", "Coming soon", "Скоро"),
    ("landing.projects.modal.revenueStrategy.title", "Two revenue engines", "Два двигателя выручки"),
    ("landing.projects.modal.revenueStrategy.foundation.title", "Foundation", "Фундамент"),
    (
        "landing.projects.modal.revenueStrategy.foundation.description",
        "Steady demand from three tourist markets",
        "Стабильный спрос трёх туристических рынков",
    ),
    ("landing.projects.modal.revenueStrategy.foundation.gcc.title", "Gulf countries", "Страны Залива"),
    (
        "landing.projects.modal.revenueStrategy.foundation.gcc.description",
        "Families on long stays who prefer large cars",
        "Семьи на длительном отдыхе, предпочитающие большие машины",
    ),
    ("landing.projects.modal.revenueStrategy.foundation.china.title", "China", "Китай"),
    (
        "landing.projects.modal.revenueStrategy.foundation.china.description",
        "The largest and fastest growing flow of visitors",
        "Крупнейший и самый быстрорастущий поток туристов",
    ),
    ("landing.projects.modal.revenueStrategy.foundation.europe.title", "Europe", "Европа"),
    (
        "landing.projects.modal.revenueStrategy.foundation.europe.description",
        "Winter season travellers who explore by car",
        "Зимние путешественники, которые исследуют страну на машине",
    ),
    ("landing.projects.modal.revenueStrategy.growth.title", "Growth driver", "Драйвер роста"),
    (
        "landing.projects.modal.revenueStrategy.growth.description",
        "Peaks of demand around major events",
        "Пики спроса вокруг крупных событий",
    ),
    ("landing.projects.modal.revenueStrategy.growth.music.title", "Music festivals", "Музыкальные фестивали"),
    (
        "landing.projects.modal.revenueStrategy.growth.music.description",
        "Fleet partnerships with organizers",
        "Партнёрство с организаторами по автопарку",
    ),
    ("landing.projects.modal.revenueStrategy.growth.sports.title", "Sports events", "Спортивные события"),
    (
        "landing.projects.modal.revenueStrategy.growth.sports.description",
        "Transfers for teams and guests",
        "Трансферы для команд и гостей",
    ),
    ("landing.projects.modal.revenueStrategy.growth.effect.title", "Brand effect", "Эффект бренда"),
    (
        "landing.projects.modal.revenueStrategy.growth.effect.description",
        "Every event brings returning customers",
        "Каждое событие приводит постоянных клиентов",
    ),
    ("landing.projects.modal.revenueStrategy.conclusion.title", "Result", "Итог"),
    (
        "landing.projects.modal.revenueStrategy.conclusion.description",
        "A stable base plus seasonal peaks keep the fleet busy all year.",
        "Стабильная база и сезонные пики загружают автопарк круглый год.",
    ),
    // How it works
    ("landing.howItWorks.title", "How the organizer works", "Как работает органайзер"),
    ("landing.howItWorks.subtitle", "Three simple steps", "Три простых шага"),
    ("landing.howItWorks.step1.title", "Write a message", "Напишите сообщение"),
    ("landing.howItWorks.step1.desc", "Tell the bot what you need to do", "Расскажите боту, что нужно сделать"),
    ("landing.howItWorks.step2.title", "AI plans", "ИИ планирует"),
    ("landing.howItWorks.step2.desc", "Tasks get dates and priorities", "Задачи получают даты и приоритеты"),
    ("landing.howItWorks.step3.title", "Stay on track", "Держите курс"),
    ("landing.howItWorks.step3.desc", "Reminders arrive right on time", "Напоминания приходят вовремя"),
    ("landing.thailand.title", "How renting works", "Как устроена аренда"),
    ("landing.thailand.subtitle", "From booking to the beach", "От бронирования до пляжа"),
    ("landing.thailand.step1.title", "Book online", "Бронируйте онлайн"),
    ("landing.thailand.step1.desc", "Pick a car and dates on the site", "Выберите машину и даты на сайте"),
    ("landing.thailand.step2.title", "Get the keys", "Получите ключи"),
    ("landing.thailand.step2.desc", "We deliver the car to your hotel", "Мы доставим машину к отелю"),
    ("landing.thailand.step3.title", "Explore", "Путешествуйте"),
    ("landing.thailand.step3.desc", "Support is one message away", "Поддержка на расстоянии одного сообщения"),
    // Why Saturway
    ("landing.whySaturway.title", "Why Saturway", "Почему Saturway"),
    ("landing.whySaturway.subtitle", "What we care about", "Что для нас важно"),
    ("landing.benefits.time", "Technology that saves time", "Технологии, которые экономят время"),
    ("landing.benefits.balance", "Balance of work and life", "Баланс работы и жизни"),
    ("landing.benefits.productivity", "Productivity without stress", "Продуктивность без стресса"),
    ("landing.benefits.privacy", "Respect for your privacy", "Уважение к вашей приватности"),
    ("landing.testimonials.title", "From the founder", "От основателя"),
    ("landing.testimonials.subtitle", "Why we started", "Почему мы начали"),
    ("landing.testimonials.founder.name", "Founder of Saturway", "Основатель Saturway"),
    ("landing.testimonials.founder.role", "Founder & CEO", "Основатель и CEO"),
    (
        "landing.testimonials.founder.text",
        "I wanted tools that give people time back. Every project we launch has to pass that test.",
        "Я хотел инструменты, которые возвращают людям время. Каждый наш проект должен пройти эту проверку.",
    ),
    ("landing.cta.title", "Ready to start?", "Готовы начать?"),
    ("landing.cta.subtitle", "Choose the project you need", "Выберите нужный проект"),
    ("landing.cta.aiOrganizerDesc", "Plan your day in Telegram", "Планируйте день в Telegram"),
    ("landing.cta.aiOrganizerBtn", "Open the bot", "Открыть бота"),
    ("landing.cta.thailandCarDesc", "Rent a car in Pattaya", "Арендуйте машину в Паттайе"),
    ("landing.cta.thailandCarBtn", "Book a car", "Забронировать"),
    ("landing.footer.tagline", "Products that save your time", "Продукты, которые экономят ваше время"),
    ("landing.footer.product", "Product", "Продукт"),
    ("landing.footer.features", "Features", "Возможности"),
    ("landing.footer.pricing", "Pricing", "Цены"),
    ("landing.footer.roadmap", "Roadmap", "Дорожная карта"),
    ("landing.footer.company", "Company", "Компания"),
    ("landing.footer.about", "About", "О нас"),
    ("landing.footer.blog", "Blog", "Блог"),
    ("landing.footer.contact", "Contact", "Контакты"),
    ("landing.footer.legal", "Legal", "Правовая информация"),
    ("landing.footer.privacy", "Privacy", "Конфиденциальность"),
    ("landing.footer.terms", "Terms", "Условия"),
    ("landing.footer.rights", "All rights reserved.", "Все права защищены."),
    // Cookie banner
    ("cookie.title", "We use cookies", "Мы используем cookie"),
    (
        "cookie.description",
        "Cookies help us understand how the site is used and make it better.",
        "Cookie помогают нам понять, как используется сайт, и сделать его лучше.",
    ),
    (
        "cookie.privacy",
        "We never sell your data to third parties.",
        "Мы никогда не продаём ваши данные третьим лицам.",
    ),
    ("cookie.accept", "Accept", "Принять"),
    ("cookie.decline", "Decline", "Отклонить"),
    // Date picker
    ("datePicker.today", "Today", "Сегодня"),
    ("datePicker.tomorrow", "Tomorrow", "Завтра"),
    ("datePicker.selectDate", "Date", "Дата"),
    ("datePicker.selectTime", "Time", "Время"),
    // Task modal
    ("taskModal.createTask", "New task", "Новая задача"),
    ("taskModal.fillDetails", "Fill in the details", "Заполните детали"),
    ("taskModal.taskTitle", "Title", "Название"),
    ("taskModal.taskTitlePlaceholder", "What needs to be done?", "Что нужно сделать?"),
    ("taskModal.description", "Description", "Описание"),
    ("taskModal.descriptionPlaceholder", "Add details", "Добавьте детали"),
    ("taskModal.optional", "optional", "необязательно"),
    ("taskModal.selectDateTime", "Select date and time", "Выберите дату и время"),
    ("taskModal.tapToSelect", "Press Enter to choose", "Нажмите Enter, чтобы выбрать"),
    ("taskModal.priority", "Priority", "Приоритет"),
    ("taskModal.reminder", "Reminder", "Напоминание"),
    ("taskModal.reminderOn", "You will be reminded", "Вы получите напоминание"),
    ("taskModal.reminderOff", "No reminder", "Без напоминания"),
    ("taskModal.back", "Back", "Назад"),
    ("taskModal.confirm", "Confirm", "Подтвердить"),
    ("taskModal.createButton", "Create task", "Создать задачу"),
    ("tasks.priority.low", "Low", "Низкий"),
    ("tasks.priority.medium", "Medium", "Средний"),
    ("tasks.priority.high", "High", "Высокий"),
    // Organizer screens
    ("app.tagline", "AI Organizer", "ИИ-органайзер"),
    ("app.nav.today", "Today", "Сегодня"),
    ("app.nav.tasks", "Tasks", "Задачи"),
    ("app.nav.profile", "Profile", "Профиль"),
    ("app.greeting", "Hello", "Привет"),
    ("app.todayEmpty", "Nothing planned for today", "На сегодня ничего не запланировано"),
    ("app.tasksEmpty", "No tasks yet. Press n to add one.", "Задач пока нет. Нажмите n, чтобы добавить."),
    ("app.tasksSummary", "tasks done", "задач выполнено"),
    ("auth.welcome", "Welcome to Saturway", "Добро пожаловать в Saturway"),
    ("auth.subtitle", "Your AI organizer for every day", "Ваш ИИ-органайзер на каждый день"),
    ("auth.continue", "Press Enter to continue", "Нажмите Enter, чтобы продолжить"),
    ("onboarding.title", "Let's get acquainted", "Давайте познакомимся"),
    ("onboarding.namePrompt", "What should we call you?", "Как к вам обращаться?"),
    ("onboarding.continue", "Press Enter when ready", "Нажмите Enter, когда будете готовы"),
    ("profile.title", "Profile", "Профиль"),
    ("profile.language", "Language", "Язык"),
    ("profile.theme", "Theme", "Тема"),
    ("theme.light", "Light", "Светлая"),
    ("theme.dark", "Dark", "Тёмная"),
    // Picker demo
    ("demo.title", "Date & Time Picker Demo", "Демо выбора даты и времени"),
    ("demo.subtitle", "Wheel picker for Saturway", "Колёсный выбор для Saturway"),
    ("demo.standalone", "Standalone picker", "Отдельный выбор"),
    ("demo.dateOnly", "Date only", "Только дата"),
    ("demo.timeOnly", "Time only", "Только время"),
    ("demo.selected", "Selected date and time", "Выбранная дата и время"),
    ("demo.created", "Created tasks", "Созданные задачи"),
    // Status messages
    ("status.opened", "Opened", "Открыто"),
    ("status.openFailed", "Could not open link", "Не удалось открыть ссылку"),
    ("status.taskCreated", "Task created", "Задача создана"),
    ("status.languageChanged", "Language: English", "Язык: русский"),
    ("status.themeChanged", "Theme changed", "Тема изменена"),
    ("status.saveFailed", "Could not save settings", "Не удалось сохранить настройки"),
    // Key hints
    ("hint.quit", "quit", "выход"),
    ("hint.language", "language", "язык"),
    ("hint.theme", "theme", "тема"),
    ("hint.next", "next", "далее"),
    ("hint.open", "open", "открыть"),
    ("hint.scroll", "scroll", "прокрутка"),
    ("hint.close", "close", "закрыть"),
    ("hint.newTask", "new task", "новая задача"),
    ("hint.toggleDone", "done", "готово"),
    ("hint.views", "views", "разделы"),
    ("hint.wheel", "wheel", "колесо"),
    ("hint.change", "change", "изменить"),
    ("hint.cookies", "cookies", "cookie"),
    ("hint.continue", "continue", "продолжить"),
];

static TABLE: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| STRINGS.iter().map(|(k, en, ru)| (*k, (*en, *ru))).collect());

/// Look up a localized string; unknown keys fall back to the key itself
pub fn translate(language: Language, key: &str) -> &str {
    match TABLE.get(key) {
        Some((en, ru)) => match language {
            Language::En => *en,
            Language::Ru => *ru,
        },
        None => key,
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_RU: [&str; 12] = [
    "янв", "фев", "мар", "апр", "мая", "июн", "июл", "авг", "сен", "окт", "ноя", "дек",
];
const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAYS_RU: [&str; 7] = ["вс", "пн", "вт", "ср", "чт", "пт", "сб"];

const MONTHS_LONG_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_LONG_RU: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];
const WEEKDAYS_LONG_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
const WEEKDAYS_LONG_RU: [&str; 7] = [
    "воскресенье", "понедельник", "вторник", "среда", "четверг", "пятница", "суббота",
];

fn month_short(language: Language, date: NaiveDate) -> &'static str {
    let idx = date.month0() as usize;
    match language {
        Language::En => MONTHS_EN[idx],
        Language::Ru => MONTHS_RU[idx],
    }
}

/// Day label used by the date wheel: "Today", "Tomorrow", otherwise "Mon, 3 Feb"
pub fn format_day_label(language: Language, date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return translate(language, "datePicker.today").to_string();
    }
    if Some(date) == today.succ_opt() {
        return translate(language, "datePicker.tomorrow").to_string();
    }
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let weekday = match language {
        Language::En => WEEKDAYS_EN[weekday],
        Language::Ru => WEEKDAYS_RU[weekday],
    };
    format!("{}, {} {}", weekday, date.day(), month_short(language, date))
}

/// Short due summary: "Today, 14:05" or "3 Feb, 09:30"
pub fn format_due(language: Language, due: NaiveDateTime, today: NaiveDate) -> String {
    let date = due.date();
    let day = if date == today {
        translate(language, "datePicker.today").to_string()
    } else if Some(date) == today.succ_opt() {
        translate(language, "datePicker.tomorrow").to_string()
    } else {
        format!("{} {}", date.day(), month_short(language, date))
    };
    format!("{}, {:02}:{:02}", day, due.hour(), due.minute())
}

/// Long readout: "Monday, 3 February 2025, 14:05"
pub fn format_full(language: Language, value: NaiveDateTime) -> String {
    let date = value.date();
    let weekday = date.weekday().num_days_from_sunday() as usize;
    let month = date.month0() as usize;
    let (weekday, month) = match language {
        Language::En => (WEEKDAYS_LONG_EN[weekday], MONTHS_LONG_EN[month]),
        Language::Ru => (WEEKDAYS_LONG_RU[weekday], MONTHS_LONG_RU[month]),
    };
    format!(
        "{}, {} {} {}, {:02}:{:02}",
        weekday,
        date.day(),
        month,
        date.year(),
        value.hour(),
        value.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn every_key_is_unique_and_has_both_languages() {
        let mut seen = std::collections::HashSet::new();
        for (key, en, ru) in STRINGS {
            assert!(seen.insert(*key), "duplicate key {key}");
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!ru.is_empty(), "missing ru for {key}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate(Language::En, "nope.missing"), "nope.missing");
        assert_eq!(translate(Language::Ru, "cookie.accept"), "Принять");
    }

    #[test]
    fn day_labels() {
        let today = date(2025, 2, 3);
        assert_eq!(format_day_label(Language::En, today, today), "Today");
        assert_eq!(format_day_label(Language::Ru, date(2025, 2, 4), today), "Завтра");
        // 2025-02-05 is a Wednesday
        assert_eq!(format_day_label(Language::En, date(2025, 2, 5), today), "Wed, 5 Feb");
        assert_eq!(format_day_label(Language::Ru, date(2025, 2, 5), today), "ср, 5 фев");
    }

    #[test]
    fn due_and_full_formats() {
        let today = date(2025, 2, 3);
        let due = today.and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_due(Language::En, due, today), "Today, 09:05");
        let later = date(2025, 3, 10).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(format_due(Language::En, later, today), "10 Mar, 18:30");
        assert_eq!(
            format_full(Language::En, due),
            "Monday, 3 February 2025, 09:05"
        );
    }
}
