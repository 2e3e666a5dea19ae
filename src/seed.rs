//! Sample content loaded by `POST /api/seed-data`.

use crate::clock::{Clock, IdGenerator};
use crate::models::{Faq, PortfolioProject, ProcessStep, Service, Testimonial};
use crate::store::ContentSet;

pub const SEEDED_MESSAGE: &str = "Данные успешно загружены";

// (title, category, image, description, featured)
const PORTFOLIO: [(&str, &str, &str, &str, bool); 6] = [
    (
        "Граффити в переходе",
        "murals",
        "https://images.unsplash.com/photo-1487452066049-a710f7296400?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwxfHxncmFmZml0aXxlbnwwfHx8fDE3NTI4MTI3MTV8MA&ixlib=rb-4.1.0&q=85",
        "Масштабная работа в подземном переходе с яркими цветами и современным дизайном.",
        true,
    ),
    (
        "Абстрактное граффити",
        "abstract",
        "https://images.unsplash.com/photo-1604716053460-3f66248bf8de?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwyfHxncmFmZml0aXxlbnwwfHx8fDE3NTI4MTI3MTV8MA&ixlib=rb-4.1.0&q=85",
        "Красочная абстрактная композиция с геометрическими элементами.",
        true,
    ),
    (
        "Персонаж граффити",
        "portraits",
        "https://images.unsplash.com/photo-1581850518616-bcb8077a2336?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Nzd8MHwxfHNlYXJjaHwzfHxncmFmZml0aXxlbnwwfHx8fDE3NTI4MTI3MTV8MA&ixlib=rb-4.1.0&q=85",
        "Яркий персонаж с детализированной прорисовкой и эмоциональным выражением.",
        false,
    ),
    (
        "Коммерческое оформление",
        "commercial",
        "https://images.pexels.com/photos/1227511/pexels-photo-1227511.jpeg",
        "Профессиональное оформление торгового центра с корпоративными элементами.",
        false,
    ),
    (
        "Стрит-арт композиция",
        "murals",
        "https://images.unsplash.com/photo-1530406831759-15c5c0cbce8b?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzF8MHwxfHNlYXJjaHwxfHxzdHJlZXQlMjBhcnR8ZW58MHx8fHwxNzUyODEyNzIyfDA&ixlib=rb-4.1.0&q=85",
        "Уличная композиция в знаменитом переулке с множеством художественных элементов.",
        false,
    ),
    (
        "Оформление автомобиля",
        "automotive",
        "https://images.unsplash.com/photo-1583225238311-0278ade1070d?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2NzF8MHwxfHNlYXJjaHwyfHxzdHJlZXQlMjBhcnR8ZW58MHx8fHwxNzUyODEyNzIyfDA&ixlib=rb-4.1.0&q=85",
        "Эксклюзивное оформление автомобиля с художественными элементами.",
        false,
    ),
];

// (icon, title, description, price)
const SERVICES: [(&str, &str, &str, &str); 6] = [
    (
        "Palette",
        "Арт за день",
        "Быстрое и качественное художественное оформление любого объекта за один день.",
        "30,000 ₽",
    ),
    (
        "Brush",
        "Художественное оформление",
        "Профессиональное граффити и стрит-арт оформление стен, фасадов и интерьеров.",
        "1,500–7,000 ₽/м²",
    ),
    (
        "Building",
        "Реактивная смена облика помещений",
        "Быстрое преображение интерьера с помощью современных граффити техник.",
        "от 50,000 ₽",
    ),
    (
        "Car",
        "Оформление автомобилей",
        "Эксклюзивное художественное оформление автомобилей и мотоциклов.",
        "от 80,000 ₽",
    ),
    (
        "Camera",
        "Создание фотозоны",
        "Дизайн и создание уникальных фотозон для мероприятий и заведений.",
        "от 40,000 ₽",
    ),
    (
        "Megaphone",
        "Реклама любой сложности",
        "Наружная реклама с элементами граффити и стрит-арта.",
        "от 25,000 ₽",
    ),
];

// (name, role, text, rating)
const TESTIMONIALS: [(&str, &str, &str, i32); 3] = [
    (
        "Алексей Петров",
        "Владелец кафе",
        "Ребята из 'Контраст' превратили наше кафе в настоящее произведение искусства! Клиенты в восторге от нового интерьера.",
        5,
    ),
    (
        "Мария Иванова",
        "Директор по маркетингу",
        "Заказывали оформление офиса. Работа выполнена быстро и качественно. Гарантия 5 лет - это серьёзно!",
        5,
    ),
    (
        "Дмитрий Козлов",
        "Владелец автосервиса",
        "Сделали крутое граффити на стене автосервиса. Теперь это местная достопримечательность! Рекомендую всем.",
        5,
    ),
];

// (question, answer)
const FAQS: [(&str, &str); 4] = [
    (
        "Сколько времени занимает выполнение работы?",
        "Время выполнения зависит от сложности проекта. Простые работы выполняем за 1-2 дня, сложные проекты могут занимать до недели.",
    ),
    (
        "Предоставляете ли гарантию на работу?",
        "Да, мы предоставляем гарантию до 5 лет на все виды работ при соблюдении условий эксплуатации.",
    ),
    (
        "Работаете ли вы по всей России?",
        "Да, мы осуществляем выезд и берём заказы по всей территории России.",
    ),
    (
        "Как рассчитывается стоимость работы?",
        "Стоимость рассчитывается индивидуально в зависимости от сложности, площади и материалов. Используйте наш калькулятор для предварительной оценки.",
    ),
];

// (title, description, icon)
const PROCESS_STEPS: [(&str, &str, &str); 5] = [
    (
        "Консультация",
        "Обсуждаем ваши идеи и пожелания, определяем объём работ и бюджет.",
        "MessageSquare",
    ),
    (
        "Эскиз",
        "Создаём детальный эскиз будущей работы с учётом всех ваших пожеланий.",
        "Sketch",
    ),
    (
        "Согласование",
        "Согласовываем эскиз, вносим правки и утверждаем финальный вариант.",
        "CheckCircle",
    ),
    (
        "Выполнение",
        "Приступаем к работе с использованием качественных материалов.",
        "Brush",
    ),
    (
        "Сдача проекта",
        "Завершаем работу, убираем за собой и сдаём готовый проект.",
        "Star",
    ),
];

/// Build the sample dataset, stamping every record with a fresh id and the
/// current time.
pub fn sample_content(clock: &dyn Clock, ids: &dyn IdGenerator) -> ContentSet {
    let now = clock.now();

    let portfolio = PORTFOLIO
        .iter()
        .map(|&(title, category, image, description, featured)| PortfolioProject {
            id: ids.next_id(),
            title: title.to_string(),
            category: category.to_string(),
            image: image.to_string(),
            description: description.to_string(),
            featured,
            created_at: now,
        })
        .collect();

    let services = SERVICES
        .iter()
        .zip(1..)
        .map(|(&(icon, title, description, price), order)| Service {
            id: ids.next_id(),
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            order,
            active: true,
            created_at: now,
        })
        .collect();

    let testimonials = TESTIMONIALS
        .iter()
        .map(|&(name, role, text, rating)| Testimonial {
            id: ids.next_id(),
            name: name.to_string(),
            role: role.to_string(),
            text: text.to_string(),
            rating,
            approved: true,
            created_at: now,
        })
        .collect();

    let faqs = FAQS
        .iter()
        .zip(1..)
        .map(|(&(question, answer), order)| Faq {
            id: ids.next_id(),
            question: question.to_string(),
            answer: answer.to_string(),
            order,
            active: true,
            created_at: now,
        })
        .collect();

    let process_steps = PROCESS_STEPS
        .iter()
        .zip(1..)
        .map(|(&(title, description, icon), step)| ProcessStep {
            id: ids.next_id(),
            step,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            active: true,
            created_at: now,
        })
        .collect();

    ContentSet {
        portfolio,
        services,
        testimonials,
        faqs,
        process_steps,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::clock::{SystemClock, UuidV7Generator};

    #[test]
    fn sample_counts() {
        let content = sample_content(&SystemClock, &UuidV7Generator);
        assert_eq!(content.portfolio.len(), 6);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.faqs.len(), 4);
        assert_eq!(content.process_steps.len(), 5);
    }

    #[test]
    fn sample_ids_are_unique() {
        let content = sample_content(&SystemClock, &UuidV7Generator);
        let mut seen = HashSet::new();
        let ids = content
            .portfolio
            .iter()
            .map(|p| p.id)
            .chain(content.services.iter().map(|s| s.id))
            .chain(content.testimonials.iter().map(|t| t.id))
            .chain(content.faqs.iter().map(|f| f.id))
            .chain(content.process_steps.iter().map(|p| p.id));
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn ordering_fields_start_at_one() {
        let content = sample_content(&SystemClock, &UuidV7Generator);
        let orders: Vec<i32> = content.services.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);
        let steps: Vec<i32> = content.process_steps.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 5]);
        assert_eq!(content.faqs.last().map(|f| f.order), Some(4));
    }

    #[test]
    fn two_featured_projects() {
        let content = sample_content(&SystemClock, &UuidV7Generator);
        assert_eq!(content.portfolio.iter().filter(|p| p.featured).count(), 2);
    }
}
