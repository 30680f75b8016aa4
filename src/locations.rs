/// Location registry for the Indonesian rainfall monitoring service.
///
/// Defines the canonical lists of monitored locations along with their
/// metadata. This is the single source of truth for location names,
/// page slugs, and coordinates — all other modules should reference
/// locations from here rather than hardcoding them.
///
/// Two registries exist because the two pipelines cover different ground:
///   - `CITY_REGISTRY`: 48 provincial capitals and major cities across
///     Indonesia, scraped hourly from their forecast pages.
///   - `JABAR_REGISTRY`: 35 points spread over West Java (cities, coast,
///     highlands), queried daily from the rainfall archive API.

// ---------------------------------------------------------------------------
// Location metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitored location.
pub struct Location {
    /// Display name, unique within its registry.
    pub name: &'static str,
    /// Path fragment identifying the location on the forecast site,
    /// e.g. "indonesia/banda-aceh". `None` for archive-only locations —
    /// the archive API is addressed by coordinates.
    pub slug: Option<&'static str>,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

/// All cities scraped by the hourly pipeline, ordered west to east
/// (Sumatra, Java, Kalimantan, Sulawesi, the Lesser Sundas, Maluku, Papua).
pub static CITY_REGISTRY: &[Location] = &[
    Location { name: "Banda Aceh", slug: Some("indonesia/banda-aceh"), latitude: 5.5483, longitude: 95.3238 },
    Location { name: "Medan", slug: Some("indonesia/medan"), latitude: 3.5952, longitude: 98.6722 },
    Location { name: "Pematangsiantar", slug: Some("indonesia/pematangsiantar"), latitude: 2.9667, longitude: 99.0667 },
    Location { name: "Padang", slug: Some("indonesia/padang"), latitude: -0.9471, longitude: 100.4172 },
    Location { name: "Bukittinggi", slug: Some("indonesia/bukittinggi"), latitude: -0.3000, longitude: 100.3833 },
    Location { name: "Pekanbaru", slug: Some("indonesia/pekanbaru"), latitude: 0.5071, longitude: 101.4478 },
    Location { name: "Jambi", slug: Some("indonesia/jambi"), latitude: -1.6101, longitude: 103.6197 },
    Location { name: "Palembang", slug: Some("indonesia/palembang"), latitude: -2.9761, longitude: 104.7754 },
    Location { name: "Bengkulu", slug: Some("indonesia/bengkulu"), latitude: -3.8004, longitude: 102.2655 },
    Location { name: "Pangkal Pinang", slug: Some("indonesia/pangkal-pinang"), latitude: -2.1333, longitude: 106.1167 },
    Location { name: "Tanjung Pinang", slug: Some("indonesia/tanjung-pinang"), latitude: 0.9167, longitude: 104.4500 },
    Location { name: "Batam", slug: Some("indonesia/batam"), latitude: 1.0456, longitude: 104.0305 },
    Location { name: "Jakarta", slug: Some("indonesia/jakarta"), latitude: -6.2088, longitude: 106.8456 },
    Location { name: "Serang", slug: Some("indonesia/serang"), latitude: -6.1200, longitude: 106.1503 },
    Location { name: "Bekasi", slug: Some("indonesia/bekasi"), latitude: -6.2383, longitude: 106.9756 },
    Location { name: "Bogor", slug: Some("indonesia/bogor"), latitude: -6.5971, longitude: 106.8060 },
    Location { name: "Bandung", slug: Some("indonesia/bandung"), latitude: -6.9175, longitude: 107.6191 },
    Location { name: "Tasikmalaya", slug: Some("indonesia/tasikmalaya"), latitude: -7.3274, longitude: 108.2207 },
    Location { name: "Cirebon", slug: Some("indonesia/cirebon"), latitude: -6.7320, longitude: 108.5523 },
    Location { name: "Semarang", slug: Some("indonesia/semarang"), latitude: -6.9667, longitude: 110.4167 },
    Location { name: "Tegal", slug: Some("indonesia/tegal"), latitude: -6.8694, longitude: 109.1402 },
    Location { name: "Pekalongan", slug: Some("indonesia/pekalongan"), latitude: -6.8898, longitude: 109.6746 },
    Location { name: "Kudus", slug: Some("indonesia/kudus"), latitude: -6.8048, longitude: 110.8405 },
    Location { name: "Surakarta", slug: Some("indonesia/surakarta"), latitude: -7.5755, longitude: 110.8243 },
    Location { name: "Yogyakarta", slug: Some("indonesia/yogyakarta"), latitude: -7.7956, longitude: 110.3695 },
    Location { name: "Surabaya", slug: Some("indonesia/surabaya"), latitude: -7.2575, longitude: 112.7521 },
    Location { name: "Malang", slug: Some("indonesia/malang"), latitude: -7.9666, longitude: 112.6326 },
    Location { name: "Madiun", slug: Some("indonesia/madiun"), latitude: -7.6298, longitude: 111.5177 },
    Location { name: "Kediri", slug: Some("indonesia/kediri"), latitude: -7.8485, longitude: 112.0183 },
    Location { name: "Pontianak", slug: Some("indonesia/pontianak"), latitude: -0.0263, longitude: 109.3425 },
    Location { name: "Palangkaraya", slug: Some("indonesia/palangkaraya"), latitude: -2.2083, longitude: 113.9167 },
    Location { name: "Banjarmasin", slug: Some("indonesia/banjarmasin"), latitude: -3.3167, longitude: 114.5928 },
    Location { name: "Balikpapan", slug: Some("indonesia/balikpapan"), latitude: -1.2675, longitude: 116.8289 },
    Location { name: "Samarinda", slug: Some("indonesia/samarinda"), latitude: -0.5022, longitude: 117.1536 },
    Location { name: "Makassar", slug: Some("indonesia/makassar"), latitude: -5.1477, longitude: 119.4327 },
    Location { name: "Palu", slug: Some("indonesia/palu"), latitude: -0.8917, longitude: 119.8707 },
    Location { name: "Kendari", slug: Some("indonesia/kendari"), latitude: -3.9972, longitude: 122.5120 },
    Location { name: "Gorontalo", slug: Some("indonesia/gorontalo"), latitude: 0.5412, longitude: 123.0595 },
    Location { name: "Manado", slug: Some("indonesia/manado"), latitude: 1.4748, longitude: 124.8421 },
    Location { name: "Denpasar", slug: Some("indonesia/denpasar"), latitude: -8.6705, longitude: 115.2126 },
    Location { name: "Singaraja", slug: Some("indonesia/singaraja"), latitude: -8.1120, longitude: 115.0882 },
    Location { name: "Mataram", slug: Some("indonesia/mataram"), latitude: -8.5833, longitude: 116.1167 },
    Location { name: "Kupang", slug: Some("indonesia/kupang"), latitude: -10.1772, longitude: 123.6070 },
    Location { name: "Ambon", slug: Some("indonesia/ambon"), latitude: -3.6954, longitude: 128.1814 },
    Location { name: "Ternate", slug: Some("indonesia/ternate"), latitude: 0.7833, longitude: 127.3667 },
    Location { name: "Sofifi", slug: Some("indonesia/sofifi"), latitude: 0.7200, longitude: 127.5700 },
    Location { name: "Manokwari", slug: Some("indonesia/manokwari"), latitude: -0.8614, longitude: 134.0620 },
    Location { name: "Jayapura", slug: Some("indonesia/jayapura"), latitude: -2.5337, longitude: 140.7181 },
];

/// All West Java points queried by the archive pipeline. Several
/// kabupaten appear more than once (city center plus outlying districts)
/// to capture coast/highland rainfall gradients.
pub static JABAR_REGISTRY: &[Location] = &[
    Location { name: "Bandung (Kota)", slug: None, latitude: -6.9175, longitude: 107.6191 },
    Location { name: "Bandung (Lembang)", slug: None, latitude: -6.8123, longitude: 107.6040 },
    Location { name: "Bandung (Soreang)", slug: None, latitude: -7.0250, longitude: 107.5190 },
    Location { name: "Bandung (Majalaya)", slug: None, latitude: -7.0500, longitude: 107.7500 },
    Location { name: "Cimahi", slug: None, latitude: -6.8715, longitude: 107.5744 },
    Location { name: "Bogor (Kota)", slug: None, latitude: -6.5971, longitude: 106.8060 },
    Location { name: "Bogor (Cibinong)", slug: None, latitude: -6.4795, longitude: 106.8436 },
    Location { name: "Bogor (Puncak)", slug: None, latitude: -6.7020, longitude: 106.9940 },
    Location { name: "Depok", slug: None, latitude: -6.4025, longitude: 106.7942 },
    Location { name: "Bekasi (Kota)", slug: None, latitude: -6.2383, longitude: 106.9756 },
    Location { name: "Bekasi (Cikarang)", slug: None, latitude: -6.2610, longitude: 107.1520 },
    Location { name: "Karawang", slug: None, latitude: -6.3040, longitude: 107.3050 },
    Location { name: "Purwakarta", slug: None, latitude: -6.5560, longitude: 107.4420 },
    Location { name: "Subang (Kota)", slug: None, latitude: -6.5710, longitude: 107.7600 },
    Location { name: "Subang (Pamanukan)", slug: None, latitude: -6.2830, longitude: 107.8160 },
    Location { name: "Indramayu", slug: None, latitude: -6.3270, longitude: 108.3220 },
    Location { name: "Cirebon (Kota)", slug: None, latitude: -6.7320, longitude: 108.5520 },
    Location { name: "Cirebon (Sumber)", slug: None, latitude: -6.7600, longitude: 108.4800 },
    Location { name: "Kuningan", slug: None, latitude: -6.9780, longitude: 108.4840 },
    Location { name: "Majalengka (Kertajati)", slug: None, latitude: -6.6500, longitude: 108.1300 },
    Location { name: "Majalengka (Kota)", slug: None, latitude: -6.8360, longitude: 108.2260 },
    Location { name: "Sumedang", slug: None, latitude: -6.8580, longitude: 107.9260 },
    Location { name: "Garut (Kota)", slug: None, latitude: -7.2270, longitude: 107.9080 },
    Location { name: "Garut (Pameungpeuk)", slug: None, latitude: -7.6500, longitude: 107.7300 },
    Location { name: "Tasikmalaya (Kota)", slug: None, latitude: -7.3270, longitude: 108.2200 },
    Location { name: "Tasikmalaya (Singaparna)", slug: None, latitude: -7.3500, longitude: 108.1100 },
    Location { name: "Ciamis", slug: None, latitude: -7.3260, longitude: 108.3530 },
    Location { name: "Banjar", slug: None, latitude: -7.3700, longitude: 108.5300 },
    Location { name: "Pangandaran", slug: None, latitude: -7.6970, longitude: 108.6540 },
    Location { name: "Sukabumi (Kota)", slug: None, latitude: -6.9270, longitude: 106.9300 },
    Location { name: "Sukabumi (Pelabuhan Ratu)", slug: None, latitude: -6.9870, longitude: 106.5500 },
    Location { name: "Sukabumi (Ujung Genteng)", slug: None, latitude: -7.3600, longitude: 106.4200 },
    Location { name: "Cianjur (Kota)", slug: None, latitude: -6.8200, longitude: 107.1400 },
    Location { name: "Cianjur (Cipanas)", slug: None, latitude: -6.7300, longitude: 107.0400 },
    Location { name: "Cianjur (Sindangbarang)", slug: None, latitude: -7.4500, longitude: 107.1300 },
];

/// Looks up a city in the hourly registry by display name.
pub fn find_city(name: &str) -> Option<&'static Location> {
    CITY_REGISTRY.iter().find(|l| l.name == name)
}

/// Returns the display names of all hourly cities, in registry order.
pub fn all_city_names() -> Vec<&'static str> {
    CITY_REGISTRY.iter().map(|l| l.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
