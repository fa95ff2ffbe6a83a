use serde::{Deserialize, Serialize};

/// A selectable zone with its standard (non-DST) offset in hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    pub id: String,
    pub name: String,
    pub offset: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirportEntry {
    pub code: String,
    pub name: String,
    pub zone: String,
    pub offset: f64,
}

/// Read-only lookup tables handed to the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCatalog {
    pub zones: Vec<ZoneEntry>,
    pub airports: Vec<AirportEntry>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<ZoneEntry>, airports: Vec<AirportEntry>) -> Self {
        Self { zones, airports }
    }

    pub fn builtin() -> Self {
        let zones = BUILTIN_ZONES
            .iter()
            .map(|(id, name, offset)| ZoneEntry {
                id: (*id).to_string(),
                name: (*name).to_string(),
                offset: *offset,
            })
            .collect();
        let airports = BUILTIN_AIRPORTS
            .iter()
            .map(|(code, name, zone, offset)| AirportEntry {
                code: (*code).to_string(),
                name: (*name).to_string(),
                zone: (*zone).to_string(),
                offset: *offset,
            })
            .collect();
        Self { zones, airports }
    }

    /// Case-insensitive airport lookup.
    pub fn airport(&self, code: &str) -> Option<&AirportEntry> {
        let code = code.trim();
        self.airports
            .iter()
            .find(|airport| airport.code.eq_ignore_ascii_case(code))
    }

    pub fn zone(&self, id: &str) -> Option<&ZoneEntry> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Extends the catalog; later entries with an existing key replace it.
    pub fn merge(mut self, other: ZoneCatalog) -> Self {
        for zone in other.zones {
            match self.zones.iter_mut().find(|existing| existing.id == zone.id) {
                Some(existing) => *existing = zone,
                None => self.zones.push(zone),
            }
        }
        for airport in other.airports {
            match self
                .airports
                .iter_mut()
                .find(|existing| existing.code.eq_ignore_ascii_case(&airport.code))
            {
                Some(existing) => *existing = airport,
                None => self.airports.push(airport),
            }
        }
        self
    }
}

const BUILTIN_ZONES: &[(&str, &str, f64)] = &[
    ("Pacific/Midway", "Midway Island (UTC-11:00)", -11.0),
    ("Pacific/Honolulu", "Hawaii (UTC-10:00)", -10.0),
    ("America/Anchorage", "Alaska (UTC-09:00)", -9.0),
    ("America/Los_Angeles", "Pacific Time - Los Angeles (UTC-08:00)", -8.0),
    ("America/Phoenix", "Arizona (UTC-07:00)", -7.0),
    ("America/Denver", "Mountain Time - Denver (UTC-07:00)", -7.0),
    ("America/Chicago", "Central Time - Chicago (UTC-06:00)", -6.0),
    ("America/Mexico_City", "Mexico City (UTC-06:00)", -6.0),
    ("America/New_York", "Eastern Time - New York (UTC-05:00)", -5.0),
    ("America/Bogota", "Bogota, Lima (UTC-05:00)", -5.0),
    ("America/Caracas", "Caracas (UTC-04:00)", -4.0),
    ("America/Halifax", "Atlantic Time - Halifax (UTC-04:00)", -4.0),
    ("America/Santiago", "Santiago (UTC-04:00)", -4.0),
    ("America/Sao_Paulo", "Sao Paulo (UTC-03:00)", -3.0),
    ("America/Buenos_Aires", "Buenos Aires (UTC-03:00)", -3.0),
    ("Atlantic/South_Georgia", "Mid-Atlantic (UTC-02:00)", -2.0),
    ("Atlantic/Azores", "Azores (UTC-01:00)", -1.0),
    ("UTC", "UTC (UTC+00:00)", 0.0),
    ("Europe/London", "London (UTC+00:00)", 0.0),
    ("Europe/Paris", "Paris, Berlin (UTC+01:00)", 1.0),
    ("Africa/Lagos", "Lagos (UTC+01:00)", 1.0),
    ("Europe/Athens", "Athens (UTC+02:00)", 2.0),
    ("Africa/Cairo", "Cairo (UTC+02:00)", 2.0),
    ("Africa/Johannesburg", "Johannesburg (UTC+02:00)", 2.0),
    ("Europe/Istanbul", "Istanbul (UTC+03:00)", 3.0),
    ("Europe/Moscow", "Moscow (UTC+03:00)", 3.0),
    ("Asia/Qatar", "Doha (UTC+03:00)", 3.0),
    ("Asia/Tehran", "Tehran (UTC+03:30)", 3.5),
    ("Asia/Dubai", "Dubai (UTC+04:00)", 4.0),
    ("Asia/Karachi", "Karachi (UTC+05:00)", 5.0),
    ("Asia/Kolkata", "Mumbai, Delhi (UTC+05:30)", 5.5),
    ("Asia/Kathmandu", "Kathmandu (UTC+05:45)", 5.75),
    ("Asia/Dhaka", "Dhaka (UTC+06:00)", 6.0),
    ("Asia/Bangkok", "Bangkok (UTC+07:00)", 7.0),
    ("Asia/Jakarta", "Jakarta (UTC+07:00)", 7.0),
    ("Asia/Singapore", "Singapore (UTC+08:00)", 8.0),
    ("Asia/Hong_Kong", "Hong Kong (UTC+08:00)", 8.0),
    ("Asia/Shanghai", "Beijing, Shanghai (UTC+08:00)", 8.0),
    ("Australia/Perth", "Perth (UTC+08:00)", 8.0),
    ("Asia/Tokyo", "Tokyo (UTC+09:00)", 9.0),
    ("Asia/Seoul", "Seoul (UTC+09:00)", 9.0),
    ("Australia/Adelaide", "Adelaide (UTC+09:30)", 9.5),
    ("Australia/Darwin", "Darwin (UTC+09:30)", 9.5),
    ("Australia/Brisbane", "Brisbane (UTC+10:00)", 10.0),
    ("Australia/Sydney", "Sydney (UTC+10:00)", 10.0),
    ("Pacific/Noumea", "Noumea (UTC+11:00)", 11.0),
    ("Pacific/Auckland", "Auckland (UTC+12:00)", 12.0),
    ("Pacific/Fiji", "Fiji (UTC+12:00)", 12.0),
];

const BUILTIN_AIRPORTS: &[(&str, &str, &str, f64)] = &[
    // North America
    ("JFK", "New York JFK", "America/New_York", -5.0),
    ("LGA", "New York LaGuardia", "America/New_York", -5.0),
    ("EWR", "Newark", "America/New_York", -5.0),
    ("BOS", "Boston", "America/New_York", -5.0),
    ("IAD", "Washington Dulles", "America/New_York", -5.0),
    ("DCA", "Washington Reagan", "America/New_York", -5.0),
    ("PHL", "Philadelphia", "America/New_York", -5.0),
    ("ATL", "Atlanta", "America/New_York", -5.0),
    ("MIA", "Miami", "America/New_York", -5.0),
    ("MCO", "Orlando", "America/New_York", -5.0),
    ("CLT", "Charlotte", "America/New_York", -5.0),
    ("DTW", "Detroit", "America/Detroit", -5.0),
    ("YYZ", "Toronto Pearson", "America/Toronto", -5.0),
    ("YUL", "Montreal", "America/Toronto", -5.0),
    ("ORD", "Chicago O'Hare", "America/Chicago", -6.0),
    ("MDW", "Chicago Midway", "America/Chicago", -6.0),
    ("DFW", "Dallas/Fort Worth", "America/Chicago", -6.0),
    ("IAH", "Houston", "America/Chicago", -6.0),
    ("MSP", "Minneapolis", "America/Chicago", -6.0),
    ("MEX", "Mexico City", "America/Mexico_City", -6.0),
    ("DEN", "Denver", "America/Denver", -7.0),
    ("SLC", "Salt Lake City", "America/Denver", -7.0),
    ("YYC", "Calgary", "America/Edmonton", -7.0),
    ("PHX", "Phoenix", "America/Phoenix", -7.0),
    ("LAX", "Los Angeles", "America/Los_Angeles", -8.0),
    ("SFO", "San Francisco", "America/Los_Angeles", -8.0),
    ("SAN", "San Diego", "America/Los_Angeles", -8.0),
    ("SEA", "Seattle", "America/Los_Angeles", -8.0),
    ("PDX", "Portland", "America/Los_Angeles", -8.0),
    ("LAS", "Las Vegas", "America/Los_Angeles", -8.0),
    ("YVR", "Vancouver", "America/Vancouver", -8.0),
    ("ANC", "Anchorage", "America/Anchorage", -9.0),
    ("HNL", "Honolulu", "Pacific/Honolulu", -10.0),
    ("OGG", "Kahului Maui", "Pacific/Honolulu", -10.0),
    ("KOA", "Kona", "Pacific/Honolulu", -10.0),
    // Europe
    ("LHR", "London Heathrow", "Europe/London", 0.0),
    ("LGW", "London Gatwick", "Europe/London", 0.0),
    ("MAN", "Manchester", "Europe/London", 0.0),
    ("DUB", "Dublin", "Europe/Dublin", 0.0),
    ("LIS", "Lisbon", "Europe/Lisbon", 0.0),
    ("KEF", "Reykjavik Keflavik", "Atlantic/Reykjavik", 0.0),
    ("CDG", "Paris Charles de Gaulle", "Europe/Paris", 1.0),
    ("ORY", "Paris Orly", "Europe/Paris", 1.0),
    ("FRA", "Frankfurt", "Europe/Berlin", 1.0),
    ("MUC", "Munich", "Europe/Berlin", 1.0),
    ("BER", "Berlin", "Europe/Berlin", 1.0),
    ("AMS", "Amsterdam", "Europe/Amsterdam", 1.0),
    ("BRU", "Brussels", "Europe/Brussels", 1.0),
    ("MAD", "Madrid", "Europe/Madrid", 1.0),
    ("BCN", "Barcelona", "Europe/Madrid", 1.0),
    ("FCO", "Rome Fiumicino", "Europe/Rome", 1.0),
    ("MXP", "Milan Malpensa", "Europe/Rome", 1.0),
    ("ZRH", "Zurich", "Europe/Zurich", 1.0),
    ("GVA", "Geneva", "Europe/Zurich", 1.0),
    ("VIE", "Vienna", "Europe/Vienna", 1.0),
    ("PRG", "Prague", "Europe/Prague", 1.0),
    ("WAW", "Warsaw", "Europe/Warsaw", 1.0),
    ("CPH", "Copenhagen", "Europe/Copenhagen", 1.0),
    ("ARN", "Stockholm Arlanda", "Europe/Stockholm", 1.0),
    ("OSL", "Oslo", "Europe/Oslo", 1.0),
    ("HEL", "Helsinki", "Europe/Helsinki", 2.0),
    ("ATH", "Athens", "Europe/Athens", 2.0),
    ("IST", "Istanbul", "Europe/Istanbul", 3.0),
    ("SVO", "Moscow Sheremetyevo", "Europe/Moscow", 3.0),
    ("DME", "Moscow Domodedovo", "Europe/Moscow", 3.0),
    // Middle East
    ("TLV", "Tel Aviv", "Asia/Jerusalem", 2.0),
    ("AMM", "Amman", "Asia/Amman", 3.0),
    ("DOH", "Doha", "Asia/Qatar", 3.0),
    ("RUH", "Riyadh", "Asia/Riyadh", 3.0),
    ("JED", "Jeddah", "Asia/Riyadh", 3.0),
    ("IKA", "Tehran Imam Khomeini", "Asia/Tehran", 3.5),
    ("DXB", "Dubai", "Asia/Dubai", 4.0),
    ("AUH", "Abu Dhabi", "Asia/Dubai", 4.0),
    ("MCT", "Muscat", "Asia/Muscat", 4.0),
    // Asia
    ("KHI", "Karachi", "Asia/Karachi", 5.0),
    ("DEL", "Delhi", "Asia/Kolkata", 5.5),
    ("BOM", "Mumbai", "Asia/Kolkata", 5.5),
    ("BLR", "Bangalore", "Asia/Kolkata", 5.5),
    ("MAA", "Chennai", "Asia/Kolkata", 5.5),
    ("CMB", "Colombo", "Asia/Colombo", 5.5),
    ("KTM", "Kathmandu", "Asia/Kathmandu", 5.75),
    ("DAC", "Dhaka", "Asia/Dhaka", 6.0),
    ("BKK", "Bangkok Suvarnabhumi", "Asia/Bangkok", 7.0),
    ("SGN", "Ho Chi Minh City", "Asia/Ho_Chi_Minh", 7.0),
    ("HAN", "Hanoi", "Asia/Ho_Chi_Minh", 7.0),
    ("CGK", "Jakarta", "Asia/Jakarta", 7.0),
    ("SIN", "Singapore Changi", "Asia/Singapore", 8.0),
    ("KUL", "Kuala Lumpur", "Asia/Kuala_Lumpur", 8.0),
    ("HKG", "Hong Kong", "Asia/Hong_Kong", 8.0),
    ("PEK", "Beijing Capital", "Asia/Shanghai", 8.0),
    ("PKX", "Beijing Daxing", "Asia/Shanghai", 8.0),
    ("PVG", "Shanghai Pudong", "Asia/Shanghai", 8.0),
    ("CAN", "Guangzhou", "Asia/Shanghai", 8.0),
    ("TPE", "Taipei Taoyuan", "Asia/Taipei", 8.0),
    ("MNL", "Manila", "Asia/Manila", 8.0),
    ("DPS", "Bali Denpasar", "Asia/Makassar", 8.0),
    ("NRT", "Tokyo Narita", "Asia/Tokyo", 9.0),
    ("HND", "Tokyo Haneda", "Asia/Tokyo", 9.0),
    ("KIX", "Osaka Kansai", "Asia/Tokyo", 9.0),
    ("ICN", "Seoul Incheon", "Asia/Seoul", 9.0),
    ("GMP", "Seoul Gimpo", "Asia/Seoul", 9.0),
    // Oceania
    ("PER", "Perth", "Australia/Perth", 8.0),
    ("DRW", "Darwin", "Australia/Darwin", 9.5),
    ("ADL", "Adelaide", "Australia/Adelaide", 9.5),
    ("BNE", "Brisbane", "Australia/Brisbane", 10.0),
    ("SYD", "Sydney", "Australia/Sydney", 10.0),
    ("MEL", "Melbourne", "Australia/Melbourne", 10.0),
    ("GUM", "Guam", "Pacific/Guam", 10.0),
    ("NOU", "Noumea", "Pacific/Noumea", 11.0),
    ("AKL", "Auckland", "Pacific/Auckland", 12.0),
    ("CHC", "Christchurch", "Pacific/Auckland", 12.0),
    ("NAN", "Nadi", "Pacific/Fiji", 12.0),
    ("PPT", "Papeete Tahiti", "Pacific/Tahiti", -10.0),
    // Africa
    ("CMN", "Casablanca", "Africa/Casablanca", 1.0),
    ("LOS", "Lagos", "Africa/Lagos", 1.0),
    ("CAI", "Cairo", "Africa/Cairo", 2.0),
    ("JNB", "Johannesburg", "Africa/Johannesburg", 2.0),
    ("CPT", "Cape Town", "Africa/Johannesburg", 2.0),
    ("ADD", "Addis Ababa", "Africa/Addis_Ababa", 3.0),
    ("NBO", "Nairobi", "Africa/Nairobi", 3.0),
    // South America
    ("BOG", "Bogota", "America/Bogota", -5.0),
    ("LIM", "Lima", "America/Lima", -5.0),
    ("UIO", "Quito", "America/Guayaquil", -5.0),
    ("CCS", "Caracas", "America/Caracas", -4.0),
    ("SCL", "Santiago", "America/Santiago", -4.0),
    ("GRU", "Sao Paulo Guarulhos", "America/Sao_Paulo", -3.0),
    ("GIG", "Rio de Janeiro", "America/Sao_Paulo", -3.0),
    ("EZE", "Buenos Aires Ezeiza", "America/Buenos_Aires", -3.0),
];
