//! Built-in reference catalogue: the product line and the world city list.

use citypages_core::{DomainResult, Location, Product};

/// Country whose cities are maintained separately and never seeded from here.
pub const EXCLUDED_COUNTRY: &str = "India";

/// State recorded for cities that have no meaningful region.
pub const NO_STATE: &str = "N/A";

struct ProductSeed {
    name: &'static str,
    slug: &'static str,
    template: Option<&'static str>,
    description: &'static str,
    features: &'static [&'static str],
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "Clear BOPP Film",
        slug: "clear-bopp-film",
        template: Some("clear_bopp_film_page"),
        description: "High-clarity film for general packaging and printing.",
        features: &["Excellent Transparency", "Good Printability"],
    },
    ProductSeed {
        name: "CPP Film",
        slug: "cpp-film",
        template: Some("cpp_film_page"),
        description: "Cast Polypropylene film known for its softness and high clarity.",
        features: &["High Gloss", "Excellent Seal Strength"],
    },
    ProductSeed {
        name: "HM Film",
        slug: "hm-film",
        template: Some("hm_film_page"),
        description: "High Molecular weight High-Density Polyethylene film.",
        features: &["High Strength", "Lightweight"],
    },
    ProductSeed {
        name: "HST BOPP Film",
        slug: "hst-bopp-film",
        template: Some("hst_bopp_film_page"),
        description: "Heat Sealable Treated BOPP film for high-speed packaging.",
        features: &["Low Sealing Temperature", "Strong Seals"],
    },
    ProductSeed {
        name: "LDPE Film",
        slug: "ldpe-film",
        template: Some("ldpe_film_page"),
        description: "Low-Density Polyethylene film offering flexibility and toughness.",
        features: &["High Flexibility", "Waterproof"],
    },
    ProductSeed {
        name: "Metallized BOPP Film",
        slug: "metallized-bopp-film",
        template: Some("metallized_bopp_film_page"),
        description: "Offers superior barrier properties for extended shelf life.",
        features: &["Excellent Gas & Moisture Barrier", "Reflective Appearance"],
    },
    ProductSeed {
        name: "Pearlised BOPP Film",
        slug: "pearlised-bopp-film",
        template: Some("pearlised_bopp_film_page"),
        description: "Opaque, high-gloss film for wrapping chocolates and soaps.",
        features: &["High Gloss Pearly Finish", "Low Density"],
    },
    ProductSeed {
        name: "Polyester Film",
        slug: "polyester-film",
        template: Some("polyester_film_page"),
        description: "Durable and versatile Polyester films (PET films).",
        features: &["High Thermal Stability", "Excellent Barrier Properties"],
    },
    ProductSeed {
        name: "Label Grade BOPP Film",
        slug: "label-grade-bopp-film",
        template: Some("label_grade_bopp_film_page"),
        description: "Engineered for high-quality, durable labels.",
        features: &["High Stiffness", "Excellent Print Reception"],
    },
    ProductSeed {
        name: "Textile & Tape Grade BOPP",
        slug: "textile-tape-grade-bopp",
        template: None,
        description: "High-strength films for garment packaging and tapes.",
        features: &["High Tensile Strength", "Puncture Resistant"],
    },
];

/// `(country, state, cities)`, grouped by region.
const CITIES_BY_COUNTRY: &[(&str, &str, &[&str])] = &[
    // North America
    ("United States", "New York", &["New York City", "Buffalo", "Rochester", "Albany", "Syracuse", "Yonkers"]),
    ("United States", "California", &["Los Angeles", "San Diego", "San Jose", "San Francisco", "Sacramento", "Fresno", "Long Beach", "Oakland", "Bakersfield", "Anaheim", "Riverside", "Santa Ana", "Irvine"]),
    ("United States", "Texas", &["Houston", "San Antonio", "Dallas", "Austin", "Fort Worth", "El Paso", "Arlington", "Corpus Christi", "Plano", "Laredo"]),
    ("United States", "Florida", &["Jacksonville", "Miami", "Tampa", "Orlando", "St. Petersburg", "Hialeah", "Fort Lauderdale", "Tallahassee"]),
    ("United States", "Illinois", &["Chicago", "Aurora", "Naperville", "Joliet", "Rockford"]),
    ("United States", "Pennsylvania", &["Philadelphia", "Pittsburgh", "Allentown", "Erie", "Reading"]),
    ("United States", "Ohio", &["Columbus", "Cleveland", "Cincinnati", "Toledo", "Akron", "Dayton"]),
    ("United States", "Arizona", &["Phoenix", "Tucson", "Mesa", "Chandler", "Scottsdale", "Glendale", "Gilbert"]),
    ("United States", "Washington", &["Seattle", "Spokane", "Tacoma", "Vancouver (WA)", "Bellevue", "Olympia"]),
    ("United States", "Massachusetts", &["Boston", "Worcester", "Springfield", "Cambridge", "Lowell"]),
    ("United States", "Colorado", &["Denver", "Colorado Springs", "Aurora (CO)", "Fort Collins"]),
    ("United States", "Georgia", &["Atlanta", "Augusta", "Columbus (GA)", "Savannah", "Macon"]),
    ("United States", "Nevada", &["Las Vegas", "Henderson", "Reno", "Carson City"]),
    ("United States", "North Carolina", &["Charlotte", "Raleigh", "Greensboro", "Durham", "Winston-Salem"]),
    ("United States", "Michigan", &["Detroit", "Grand Rapids", "Warren", "Sterling Heights", "Lansing"]),
    ("United States", "Virginia", &["Virginia Beach", "Norfolk", "Richmond", "Newport News", "Alexandria"]),
    ("United States", "Maryland", &["Baltimore", "Annapolis", "Frederick"]),
    ("United States", "Minnesota", &["Minneapolis", "Saint Paul", "Rochester (MN)"]),
    ("United States", "Missouri", &["Kansas City", "St. Louis", "Springfield (MO)", "Jefferson City"]),
    ("United States", "Wisconsin", &["Milwaukee", "Madison", "Green Bay"]),
    ("United States", "Tennessee", &["Nashville", "Memphis", "Knoxville", "Chattanooga"]),
    ("United States", "Indiana", &["Indianapolis", "Fort Wayne", "Evansville"]),
    ("United States", "Oregon", &["Portland", "Salem", "Eugene"]),
    ("United States", "Utah", &["Salt Lake City", "West Valley City", "Provo"]),
    ("United States", "Kentucky", &["Louisville", "Lexington", "Frankfort"]),
    ("Canada", "Ontario", &["Toronto", "Ottawa", "Mississauga", "Hamilton", "London (ON)", "Markham", "Vaughan", "Kitchener", "Windsor"]),
    ("Canada", "Quebec", &["Montreal", "Quebec City", "Laval", "Gatineau", "Longueuil"]),
    ("Canada", "British Columbia", &["Vancouver", "Victoria", "Surrey", "Burnaby", "Richmond (BC)"]),
    ("Canada", "Alberta", &["Calgary", "Edmonton", "Red Deer"]),
    ("Canada", "Manitoba", &["Winnipeg"]),
    ("Canada", "Saskatchewan", &["Saskatoon", "Regina"]),
    ("Canada", "Nova Scotia", &["Halifax"]),
    ("Mexico", "N/A", &["Mexico City", "Guadalajara", "Monterrey", "Puebla", "Tijuana", "Cancun", "León", "Juárez", "Toluca", "Querétaro", "Mérida"]),
    // South America
    ("Brazil", "N/A", &["São Paulo", "Rio de Janeiro", "Brasília", "Salvador", "Fortaleza", "Belo Horizonte", "Manaus", "Curitiba", "Recife", "Porto Alegre"]),
    ("Argentina", "N/A", &["Buenos Aires", "Córdoba", "Rosario", "Mendoza", "La Plata"]),
    ("Colombia", "N/A", &["Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena"]),
    ("Chile", "N/A", &["Santiago", "Valparaíso", "Concepción"]),
    ("Peru", "N/A", &["Lima", "Arequipa", "Trujillo"]),
    ("Ecuador", "N/A", &["Quito", "Guayaquil", "Cuenca"]),
    ("Venezuela", "N/A", &["Caracas", "Maracaibo", "Valencia"]),
    ("Bolivia", "N/A", &["La Paz", "Santa Cruz de la Sierra", "Cochabamba"]),
    ("Uruguay", "N/A", &["Montevideo"]),
    ("Paraguay", "N/A", &["Asunción"]),
    // Europe
    ("United Kingdom", "N/A", &["London", "Birmingham", "Manchester", "Glasgow", "Liverpool", "Bristol", "Edinburgh", "Leeds", "Sheffield", "Cardiff", "Belfast", "Newcastle", "Nottingham", "Coventry", "Leicester"]),
    ("Germany", "N/A", &["Berlin", "Hamburg", "Munich", "Cologne", "Frankfurt", "Stuttgart", "Düsseldorf", "Dortmund", "Essen", "Leipzig", "Bremen", "Dresden", "Hanover", "Nuremberg"]),
    ("France", "N/A", &["Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg", "Montpellier", "Bordeaux", "Lille", "Rennes"]),
    ("Spain", "N/A", &["Madrid", "Barcelona", "Valencia", "Seville", "Zaragoza", "Málaga", "Bilbao", "Alicante", "Murcia"]),
    ("Italy", "N/A", &["Rome", "Milan", "Naples", "Turin", "Florence", "Palermo", "Genoa", "Bologna", "Venice", "Verona", "Catania"]),
    ("Russia", "N/A", &["Moscow", "Saint Petersburg", "Novosibirsk", "Yekaterinburg", "Kazan", "Nizhny Novgorod", "Samara"]),
    ("Netherlands", "N/A", &["Amsterdam", "Rotterdam", "The Hague", "Utrecht", "Eindhoven"]),
    ("Belgium", "N/A", &["Brussels", "Antwerp", "Ghent", "Bruges"]),
    ("Switzerland", "N/A", &["Zurich", "Geneva", "Basel", "Lausanne", "Bern"]),
    ("Sweden", "N/A", &["Stockholm", "Gothenburg", "Malmö"]),
    ("Norway", "N/A", &["Oslo", "Bergen"]),
    ("Denmark", "N/A", &["Copenhagen", "Aarhus"]),
    ("Ireland", "N/A", &["Dublin", "Cork"]),
    ("Portugal", "N/A", &["Lisbon", "Porto"]),
    ("Austria", "N/A", &["Vienna", "Graz", "Salzburg"]),
    ("Greece", "N/A", &["Athens", "Thessaloniki"]),
    ("Poland", "N/A", &["Warsaw", "Kraków", "Łódź", "Wrocław", "Poznań"]),
    ("Ukraine", "N/A", &["Kyiv", "Kharkiv", "Odesa", "Lviv"]),
    ("Romania", "N/A", &["Bucharest", "Cluj-Napoca", "Timișoara"]),
    ("Czech Republic", "N/A", &["Prague", "Brno"]),
    ("Hungary", "N/A", &["Budapest"]),
    ("Finland", "N/A", &["Helsinki", "Tampere"]),
    ("Belarus", "N/A", &["Minsk"]),
    ("Croatia", "N/A", &["Zagreb", "Split"]),
    ("Serbia", "N/A", &["Belgrade"]),
    ("Slovenia", "N/A", &["Ljubljana"]),
    ("Lithuania", "N/A", &["Vilnius"]),
    ("Latvia", "N/A", &["Riga"]),
    ("Estonia", "N/A", &["Tallinn"]),
    ("Bulgaria", "N/A", &["Sofia"]),
    ("Iceland", "N/A", &["Reykjavik"]),
    // Asia
    ("China", "N/A", &["Shanghai", "Beijing", "Chongqing", "Tianjin", "Guangzhou", "Shenzhen", "Chengdu", "Hangzhou", "Wuhan", "Nanjing", "Xi'an", "Qingdao", "Dalian"]),
    ("Japan", "N/A", &["Tokyo", "Yokohama", "Osaka", "Nagoya", "Sapporo", "Fukuoka", "Kyoto", "Kobe", "Kawasaki", "Hiroshima", "Sendai"]),
    ("India", "N/A", &[]),
    ("South Korea", "N/A", &["Seoul", "Busan", "Incheon", "Daegu", "Daejeon", "Gwangju"]),
    ("Indonesia", "N/A", &["Jakarta", "Surabaya", "Bandung", "Medan", "Semarang", "Makassar"]),
    ("Thailand", "N/A", &["Bangkok", "Chiang Mai", "Phuket", "Pattaya", "Nakhon Ratchasima"]),
    ("Malaysia", "N/A", &["Kuala Lumpur", "George Town", "Johor Bahru", "Ipoh"]),
    ("Singapore", "N/A", &["Singapore"]),
    ("Vietnam", "N/A", &["Ho Chi Minh City", "Hanoi", "Da Nang", "Haiphong"]),
    ("Philippines", "N/A", &["Manila", "Quezon City", "Cebu City", "Davao City"]),
    ("United Arab Emirates", "N/A", &["Dubai", "Abu Dhabi", "Sharjah", "Ajman"]),
    ("Saudi Arabia", "N/A", &["Riyadh", "Jeddah", "Mecca", "Medina", "Dammam"]),
    ("Turkey", "N/A", &["Istanbul", "Ankara", "Izmir", "Bursa", "Antalya"]),
    ("Israel", "N/A", &["Jerusalem", "Tel Aviv", "Haifa"]),
    ("Qatar", "N/A", &["Doha", "Al Rayyan"]),
    ("Kuwait", "N/A", &["Kuwait City"]),
    ("Oman", "N/A", &["Muscat"]),
    ("Bahrain", "N/A", &["Manama"]),
    ("Hong Kong", "N/A", &["Hong Kong"]),
    ("Taiwan", "N/A", &["Taipei", "Kaohsiung", "Taichung", "Tainan"]),
    ("Kazakhstan", "N/A", &["Almaty", "Nur-Sultan", "Shymkent"]),
    ("Uzbekistan", "N/A", &["Tashkent", "Samarkand"]),
    // Africa
    ("Egypt", "N/A", &["Cairo", "Alexandria", "Giza", "Luxor"]),
    ("South Africa", "N/A", &["Johannesburg", "Cape Town", "Durban", "Pretoria", "Port Elizabeth", "Bloemfontein"]),
    ("Nigeria", "N/A", &["Lagos", "Abuja", "Kano", "Ibadan", "Port Harcourt"]),
    ("Kenya", "N/A", &["Nairobi", "Mombasa", "Kisumu"]),
    ("Ethiopia", "N/A", &["Addis Ababa"]),
    ("Ghana", "N/A", &["Accra", "Kumasi"]),
    ("Morocco", "N/A", &["Casablanca", "Rabat", "Fez", "Marrakesh"]),
    ("Tanzania", "N/A", &["Dar es Salaam", "Dodoma", "Arusha"]),
    ("Algeria", "N/A", &["Algiers", "Oran"]),
    ("Angola", "N/A", &["Luanda"]),
    ("Ivory Coast", "N/A", &["Abidjan"]),
    ("Senegal", "N/A", &["Dakar"]),
    ("Tunisia", "N/A", &["Tunis"]),
    ("DR Congo", "N/A", &["Kinshasa", "Lubumbashi"]),
    ("Sudan", "N/A", &["Khartoum"]),
    ("Uganda", "N/A", &["Kampala"]),
    ("Mozambique", "N/A", &["Maputo"]),
    ("Cameroon", "N/A", &["Douala", "Yaoundé"]),
    ("Zimbabwe", "N/A", &["Harare"]),
    ("Zambia", "N/A", &["Lusaka"]),
    ("Botswana", "N/A", &["Gaborone"]),
    ("Namibia", "N/A", &["Windhoek"]),
    ("Rwanda", "N/A", &["Kigali"]),
    // Oceania
    ("Australia", "New South Wales", &["Sydney", "Newcastle"]),
    ("Australia", "Victoria", &["Melbourne", "Geelong"]),
    ("Australia", "Queensland", &["Brisbane", "Gold Coast", "Sunshine Coast", "Cairns"]),
    ("Australia", "Western Australia", &["Perth", "Fremantle"]),
    ("Australia", "South Australia", &["Adelaide"]),
    ("Australia", "Tasmania", &["Hobart"]),
    ("Australia", "N/A", &["Canberra", "Darwin"]),
    ("New Zealand", "N/A", &["Auckland", "Wellington", "Christchurch", "Hamilton", "Queenstown"]),
    ("Fiji", "N/A", &["Suva"]),
];

/// The product line, in catalogue order.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| {
            let product = Product::new(seed.name, seed.slug, seed.description)
                .with_features(seed.features.iter().copied());
            match seed.template {
                Some(template) => product.with_template(template),
                None => product,
            }
        })
        .collect()
}

/// Every non-excluded city as a location, slug derived from the city name.
///
/// Slugs are not deduplicated here; the store skips repeats on insert.
pub fn world_locations() -> DomainResult<Vec<Location>> {
    CITIES_BY_COUNTRY
        .iter()
        .filter(|(country, _, _)| *country != EXCLUDED_COUNTRY)
        .flat_map(|(country, state, cities)| {
            let state = if state.is_empty() { NO_STATE } else { *state };
            cities
                .iter()
                .map(move |city| Location::from_city(*city, state, *country))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn product_line_is_complete() {
        let products = products();
        assert_eq!(products.len(), 10);
        assert_eq!(products[1].slug, "cpp-film");
        assert_eq!(products[1].template(), "cpp_film_page");
        assert_eq!(products[1].features, vec!["High Gloss", "Excellent Seal Strength"]);

        let last = products.last().unwrap();
        assert_eq!(last.slug, "textile-tape-grade-bopp");
        assert_eq!(last.template_name, None);
        assert_eq!(last.template(), citypages_core::DEFAULT_TEMPLATE);
    }

    #[test]
    fn product_slugs_are_unique() {
        let products = products();
        let slugs: HashSet<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), products.len());
    }

    #[test]
    fn world_locations_exclude_india() {
        let locations = world_locations().unwrap();
        assert_eq!(locations.len(), 478);
        assert!(locations.iter().all(|l| l.country != EXCLUDED_COUNTRY));
    }

    #[test]
    fn world_locations_keep_table_order_and_derive_slugs() {
        let locations = world_locations().unwrap();
        assert_eq!(locations[0].city, "New York City");
        assert_eq!(locations[0].slug, "new-york-city");
        assert_eq!(locations[0].state, "New York");

        let sao_paulo = locations.iter().find(|l| l.city == "São Paulo").unwrap();
        assert_eq!(sao_paulo.slug, "so-paulo");
        assert_eq!(sao_paulo.state, NO_STATE);

        assert_eq!(locations.last().unwrap().slug, "suva");
    }

    #[test]
    fn a_few_city_names_collide() {
        let locations = world_locations().unwrap();
        let unique: HashSet<&str> = locations.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(unique.len(), 474);

        let valencias: Vec<&str> = locations
            .iter()
            .filter(|l| l.slug == "valencia")
            .map(|l| l.country.as_str())
            .collect();
        assert_eq!(valencias, vec!["Venezuela", "Spain"]);
    }
}
