//! Curated Russian fact content.
//!
//! The content source is the fixed, read-only seed lexicon: a pool of facts
//! per topic plus an unscoped general pool. It never changes at runtime and
//! holds no state; the catalog consults it for by-topic draws and for
//! seeding a fresh data file.

use crate::validate;
use rand::seq::SliceRandom;
use rand::Rng;

static ANIMAL_FACTS: &[&str] = &[
    "У осьминога три сердца.",
    "Сердце креветки находится в ее голове.",
    "Кошки проводят около 70% своей жизни во сне.",
    "Улитки могут спать до 3 лет.",
    "Язык жирафа может достигать длины 45 см.",
    "Пингвины могут прыгать в высоту до 2 метров.",
    "Ленивцы спускаются с деревьев только раз в неделю.",
    "У улитки около 25 000 зубов.",
    "Колибри - единственная птица, которая умеет летать назад.",
    "Слоны могут учуять воду на расстоянии до 5 км.",
];

static SCIENCE_FACTS: &[&str] = &[
    "Мозг человека на 60% состоит из жира.",
    "Свет от Солнца до Земли доходит за 8 минут 20 секунд.",
    "Человек моргает примерно 15-20 раз в минуту.",
    "В человеческом теле около 37 триллионов клеток.",
    "Кости человека в 4 раза прочнее бетона.",
    "Земля вращается со скоростью около 1670 км/ч на экваторе.",
    "Атомы на 99,9999999999999% состоят из пустого пространства.",
    "У человека и банана около 50% общих генов.",
    "Венера - единственная планета, вращающаяся против часовой стрелки.",
    "Один год на Венере длится 225 земных дней.",
];

static GEOGRAPHY_FACTS: &[&str] = &[
    "В России находится самое глубокое озеро в мире - Байкал.",
    "В Исландии нет комаров.",
    "Финляндия - самая счастливая страна в мире.",
    "В Японии больше всего в мире торговых автоматов.",
    "Канада имеет самую длинную береговую линию в мире.",
    "В Сибири находится 25% мировых лесов.",
    "Россия - самая большая страна в мире по площади.",
    "В Чили находится самая сухая пустыня в мире - Атакама.",
    "В Австралии больше кенгуру, чем людей.",
    "В Гренландии самое большое количество айсбергов.",
];

static HISTORY_FACTS: &[&str] = &[
    "В Древнем Риме моча использовалась как чистящее средство.",
    "Наполеон был атакован кроликами во время охоты.",
    "Викинги использовали птиц для навигации в море.",
    "В Древнем Египте фараоны носили накладные бороды.",
    "Первые ножницы были изобретены в Древнем Риме.",
    "В Средневековье пиво было безопаснее воды.",
    "Древние греки использовали камни вместо туалетной бумаги.",
    "В XIX веке кетчуп продавался как лекарство.",
    "Клеопатра жила ближе к изобретению iPhone, чем к строительству пирамид.",
    "В Древнем Китае использовали бумажные деньги уже в VII веке.",
];

static TECHNOLOGY_FACTS: &[&str] = &[
    "Первый компьютерный вирус был создан в 1983 году.",
    "Пароль '123456' до сих пор один из самых популярных.",
    "Первая компьютерная мышь была сделана из дерева.",
    "Самый первый сайт в интернете до сих пор работает.",
    "Первая камера на телефоне появилась в 2000 году.",
    "Wi-Fi был изобретен в 1991 году.",
    "Первое SMS было отправлено в 1992 году.",
    "YouTube был основан тремя бывшими сотрудниками PayPal.",
    "Первая игра в истории - 'Tennis for Two' (1958).",
    "Самый первый домен в интернете - symbolics.com.",
];

static CULTURE_FACTS: &[&str] = &[
    "В Швейцарии запрещено мыть машину по воскресеньям.",
    "В Японии есть специальные звукопоглощающие столбы.",
    "В Саудовской Аравии нет кинотеатров до 2018 года.",
    "Во Франции запрещено называть свинью Наполеоном.",
    "В Сингапуре запрещено жевать жвачку.",
    "В Италии больше объектов Всемирного наследия ЮНЕСКО, чем в любой другой стране.",
    "В Индии больше всего в мире вегетарианцев.",
    "В Бразилии говорят на португальском, а не на испанском.",
    "В Канаде самый высокий уровень образования в мире.",
    "В Японии самая высокая продолжительность жизни.",
];

static SPORT_FACTS: &[&str] = &[
    "Футбол - самый популярный вид спорта в мире.",
    "Баскетбол был изобретен в 1891 году в США.",
    "Волейбол был изобретен в 1895 году.",
    "Хоккей с шайбой появился в Канаде в XIX веке.",
    "Теннис зародился во Франции в XII веке.",
    "Плавание было включено в Олимпийские игры в 1896 году.",
    "Бег на 100 метров - самая короткая дистанция в легкой атлетике.",
    "Шахматы - один из старейших видов спорта.",
    "Серфинг был изобретен в Полинезии 4000 лет назад.",
    "Скалолазание стало олимпийским видом спорта в 2020 году.",
];

static CUISINE_FACTS: &[&str] = &[
    "Мед никогда не портится.",
    "Помидор - это фрукт, а не овощ.",
    "Морковь изначально была фиолетовой.",
    "Кетчуп изначально был рыбным соусом.",
    "Шоколад был валютой у древних майя.",
    "Сыр был изобретен более 7000 лет назад.",
    "Чай - второй по популярности напиток после воды.",
    "Кофе был открыт в Эфиопии в IX веке.",
    "Соль когда-то ценилась на вес золота.",
    "Яблоки плавают, потому что на 25% состоят из воздуха.",
];

static HEALTH_FACTS: &[&str] = &[
    "Смех укрепляет иммунную систему.",
    "Ходьба пешком продлевает жизнь.",
    "Сон укрепляет память.",
    "Вода составляет около 60% веса тела взрослого человека.",
    "Человек делает около 20 000 вдохов в день.",
    "Улыбка задействует 17 мышц лица.",
    "Человек теряет около 50-100 волос в день.",
    "Ногти на руках растут в 4 раза быстрее, чем на ногах.",
    "Сердце перекачивает около 7500 литров крови в день.",
    "Человек может прожить без воды около 3 дней.",
];

/// Unscoped pool used for random draws outside any topic.
static GENERAL_FACTS: &[&str] = &[
    "Мозг человека на 60% состоит из жира.",
    "В Японии есть специальные звукопоглощающие столбы, чтобы заглушить шум от поездов.",
    "Сердце креветки находится в ее голове.",
    "Кошки могут издавать более 100 различных звуков, а собаки только около 10.",
    "В Швейцарии запрещено мыть машину по воскресеньям.",
    "Мед никогда не портится. Археологи находили съедобный мед в гробницах фараонов.",
    "У осьминога три сердца.",
    "В Исландии нет комаров.",
    "Человек моргает примерно 15-20 раз в минуту, то есть около 12 миллионов раз в год.",
    "Язык жирафа может достигать длины 45 см.",
    "Свет от Солнца до Земли доходит за 8 минут 20 секунд.",
    "В Древнем Риме моча использовалась как чистящее средство для одежды.",
    "Пингвины могут прыгать в высоту до 2 метров.",
    "В России находится самое глубокое озеро в мире - Байкал.",
    "Ленивцы спускаются с деревьев только раз в неделю, чтобы сходить в туалет.",
    "У улитки около 25 000 зубов.",
    "Финляндия - самая счастливая страна в мире (по данным World Happiness Report).",
    "Человеческое тело содержит достаточно железа, чтобы сделать гвоздь длиной 7,5 см.",
    "В Японии больше всего в мире торговых автоматов - около 5 миллионов.",
    "Земля - единственная планета, не названная в честь бога.",
];

/// Curated topics in presentation order, with their fact pools.
static CURATED_POOLS: &[(&str, &[&str])] = &[
    ("животные", ANIMAL_FACTS),
    ("наука", SCIENCE_FACTS),
    ("география", GEOGRAPHY_FACTS),
    ("история", HISTORY_FACTS),
    ("технологии", TECHNOLOGY_FACTS),
    ("культура", CULTURE_FACTS),
    ("спорт", SPORT_FACTS),
    ("кухня", CUISINE_FACTS),
    ("здоровье", HEALTH_FACTS),
];

/// A fixed, read-only source of fact content.
///
/// Topic keys are stored lower-case; lookups are case-insensitive. The
/// built-in source carries the full curated lexicon, while custom pools
/// exist for deterministic tests.
#[derive(Debug, Clone)]
pub struct ContentSource {
    /// Per-topic pools, in presentation order.
    pools: Vec<(String, Vec<String>)>,
    /// Unscoped pool for random draws.
    general: Vec<String>,
}

impl ContentSource {
    /// The full curated Russian lexicon.
    pub fn builtin() -> Self {
        let pools = CURATED_POOLS
            .iter()
            .map(|(name, facts)| {
                (
                    (*name).to_string(),
                    facts.iter().map(|f| (*f).to_string()).collect(),
                )
            })
            .collect();
        let general = GENERAL_FACTS.iter().map(|f| (*f).to_string()).collect();
        Self { pools, general }
    }

    /// A source with custom pools. Topic keys are normalized on construction.
    pub fn with_pools(pools: Vec<(String, Vec<String>)>, general: Vec<String>) -> Self {
        let pools = pools
            .into_iter()
            .map(|(name, facts)| (validate::normalize_topic(&name), facts))
            .collect();
        Self { pools, general }
    }

    /// The fixed topic set, in presentation order.
    pub fn topics(&self) -> Vec<&str> {
        self.pools.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Draw a uniformly-random fact for a topic, if the topic is known.
    pub fn fact_for_topic(&self, topic: &str) -> Option<&str> {
        self.fact_for_topic_with_rng(topic, &mut rand::thread_rng())
    }

    /// Draw a by-topic fact with a specific RNG (useful for testing).
    pub fn fact_for_topic_with_rng<R: Rng>(&self, topic: &str, rng: &mut R) -> Option<&str> {
        let topic = validate::normalize_topic(topic);
        let (_, facts) = self.pools.iter().find(|(name, _)| *name == topic)?;
        facts.choose(rng).map(String::as_str)
    }

    /// Draw a uniformly-random fact from the general pool.
    pub fn random_fact(&self) -> Option<&str> {
        self.random_fact_with_rng(&mut rand::thread_rng())
    }

    /// Draw a general-pool fact with a specific RNG.
    pub fn random_fact_with_rng<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        self.general.choose(rng).map(String::as_str)
    }

    /// Sample up to `n` distinct general-pool facts. Used when seeding a
    /// fresh catalog.
    pub fn sample_general<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<&str> {
        self.general
            .choose_multiple(rng, n)
            .map(String::as_str)
            .collect()
    }
}
