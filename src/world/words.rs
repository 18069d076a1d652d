//! Secret word lists, one per enemy category.

#[derive(Debug, Clone, Copy)]
pub struct WordCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub words: &'static [&'static str],
}

const ANIMALS: &[&str] = &[
    "кошка", "собака", "медведь", "волк", "лиса", "заяц", "белка", "ёжик", "барсук", "олень",
    "лошадь", "корова", "жираф", "слон", "тигр", "зебра", "верблюд", "пингвин",
];

const PROFESSIONS: &[&str] = &[
    "учитель", "врач", "повар", "пилот", "строитель", "художник", "писатель", "инженер",
    "пожарный", "библиотекарь", "садовник", "кузнец", "пекарь", "музыкант",
];

const GEOGRAPHY: &[&str] = &[
    "океан", "пустыня", "вулкан", "остров", "полуостров", "пролив", "равнина", "ледник",
    "водопад", "архипелаг", "материк", "экватор", "меридиан", "залив",
];

const PLANTS: &[&str] = &[
    "ромашка", "берёза", "папоротник", "одуванчик", "крапива", "подсолнух", "колокольчик",
    "тюльпан", "сирень", "кактус", "шиповник", "рябина", "клевер",
];

const MYTHOLOGY: &[&str] = &[
    "дракон", "грифон", "кентавр", "феникс", "единорог", "русалка", "минотавр", "василиск",
    "химера", "леший", "домовой", "кикимора", "сфинкс",
];

pub fn get_word_categories() -> Vec<WordCategory> {
    vec![
        WordCategory {
            id: "animals",
            name: "Животные",
            words: ANIMALS,
        },
        WordCategory {
            id: "professions",
            name: "Профессии",
            words: PROFESSIONS,
        },
        WordCategory {
            id: "geography",
            name: "География",
            words: GEOGRAPHY,
        },
        WordCategory {
            id: "plants",
            name: "Растения",
            words: PLANTS,
        },
        WordCategory {
            id: "mythology",
            name: "Мифология",
            words: MYTHOLOGY,
        },
    ]
}

pub fn get_word_category(id: &str) -> Option<WordCategory> {
    get_word_categories().into_iter().find(|c| c.id == id)
}
