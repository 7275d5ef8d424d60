use crate::models::District;

/// All 64 districts, grouped by division. Dhaka comes first: it is the
/// reference location and the fallback for unknown ids.
///
/// Offsets are whole minutes relative to Dhaka, roughly four minutes per
/// degree of longitude.
pub static DISTRICTS: [District; 64] = [
    // Dhaka division
    District::new("dhaka", "ঢাকা", "Dhaka", 0),
    District::new("gazipur", "গাজীপুর", "Gazipur", 0),
    District::new("narayanganj", "নারায়ণগঞ্জ", "Narayanganj", 0),
    District::new("narsingdi", "নরসিংদী", "Narsingdi", -1),
    District::new("manikganj", "মানিকগঞ্জ", "Manikganj", 2),
    District::new("munshiganj", "মুন্সিগঞ্জ", "Munshiganj", 0),
    District::new("tangail", "টাঙ্গাইল", "Tangail", 2),
    District::new("kishoreganj", "কিশোরগঞ্জ", "Kishoreganj", -1),
    District::new("faridpur", "ফরিদপুর", "Faridpur", 2),
    District::new("madaripur", "মাদারীপুর", "Madaripur", 1),
    District::new("shariatpur", "শরীয়তপুর", "Shariatpur", 0),
    District::new("gopalganj", "গোপালগঞ্জ", "Gopalganj", 2),
    District::new("rajbari", "রাজবাড়ী", "Rajbari", 3),
    // Chattogram division
    District::new("chattogram", "চট্টগ্রাম", "Chattogram", -6),
    District::new("coxsbazar", "কক্সবাজার", "Cox's Bazar", -6),
    District::new("cumilla", "কুমিল্লা", "Cumilla", -3),
    District::new("feni", "ফেনী", "Feni", -4),
    District::new("noakhali", "নোয়াখালী", "Noakhali", -3),
    District::new("lakshmipur", "লক্ষ্মীপুর", "Lakshmipur", -2),
    District::new("chandpur", "চাঁদপুর", "Chandpur", -1),
    District::new("brahmanbaria", "ব্রাহ্মণবাড়িয়া", "Brahmanbaria", -3),
    District::new("rangamati", "রাঙ্গামাটি", "Rangamati", -7),
    District::new("khagrachhari", "খাগড়াছড়ি", "Khagrachhari", -6),
    District::new("bandarban", "বান্দরবান", "Bandarban", -7),
    // Sylhet division
    District::new("sylhet", "সিলেট", "Sylhet", -6),
    District::new("moulvibazar", "মৌলভীবাজার", "Moulvibazar", -5),
    District::new("habiganj", "হবিগঞ্জ", "Habiganj", -4),
    District::new("sunamganj", "সুনামগঞ্জ", "Sunamganj", -4),
    // Rajshahi division
    District::new("rajshahi", "রাজশাহী", "Rajshahi", 7),
    District::new("chapainawabganj", "চাঁপাইনবাবগঞ্জ", "Chapainawabganj", 9),
    District::new("naogaon", "নওগাঁ", "Naogaon", 6),
    District::new("natore", "নাটোর", "Natore", 6),
    District::new("pabna", "পাবনা", "Pabna", 5),
    District::new("sirajganj", "সিরাজগঞ্জ", "Sirajganj", 3),
    District::new("bogura", "বগুড়া", "Bogura", 4),
    District::new("joypurhat", "জয়পুরহাট", "Joypurhat", 6),
    // Khulna division
    District::new("khulna", "খুলনা", "Khulna", 3),
    District::new("bagerhat", "বাগেরহাট", "Bagerhat", 2),
    District::new("satkhira", "সাতক্ষীরা", "Satkhira", 5),
    District::new("jashore", "যশোর", "Jashore", 5),
    District::new("narail", "নড়াইল", "Narail", 4),
    District::new("magura", "মাগুরা", "Magura", 4),
    District::new("jhenaidah", "ঝিনাইদহ", "Jhenaidah", 5),
    District::new("chuadanga", "চুয়াডাঙ্গা", "Chuadanga", 6),
    District::new("kushtia", "কুষ্টিয়া", "Kushtia", 5),
    District::new("meherpur", "মেহেরপুর", "Meherpur", 7),
    // Barishal division
    District::new("barishal", "বরিশাল", "Barishal", 0),
    District::new("bhola", "ভোলা", "Bhola", -1),
    District::new("patuakhali", "পটুয়াখালী", "Patuakhali", 0),
    District::new("pirojpur", "পিরোজপুর", "Pirojpur", 2),
    District::new("jhalokathi", "ঝালকাঠি", "Jhalokathi", 1),
    District::new("barguna", "বরগুনা", "Barguna", 1),
    // Rangpur division
    District::new("rangpur", "রংপুর", "Rangpur", 5),
    District::new("dinajpur", "দিনাজপুর", "Dinajpur", 7),
    District::new("thakurgaon", "ঠাকুরগাঁও", "Thakurgaon", 8),
    District::new("panchagarh", "পঞ্চগড়", "Panchagarh", 7),
    District::new("nilphamari", "নীলফামারী", "Nilphamari", 6),
    District::new("lalmonirhat", "লালমনিরহাট", "Lalmonirhat", 4),
    District::new("kurigram", "কুড়িগ্রাম", "Kurigram", 3),
    District::new("gaibandha", "গাইবান্ধা", "Gaibandha", 4),
    // Mymensingh division
    District::new("mymensingh", "ময়মনসিংহ", "Mymensingh", 0),
    District::new("jamalpur", "জামালপুর", "Jamalpur", 2),
    District::new("sherpur", "শেরপুর", "Sherpur", 2),
    District::new("netrokona", "নেত্রকোনা", "Netrokona", -1),
];
