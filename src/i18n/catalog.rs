//! Built-in offline translations for the detector's object categories

use super::TranslationTable;

/// Insert every curated category into `table`
pub fn populate(table: &mut TranslationTable) {
    let t = table;

    // People & Body Parts
    t.insert("human_face", "Human Face", "Visage humain", "Menschliches Gesicht", "Volto umano");
    t.insert("human_hand", "Human Hand", "Main humaine", "Menschliche Hand", "Mano umana");
    t.insert("person", "Person", "Personne", "Person", "Persona");
    t.insert("skull", "Skull", "Crâne", "Schädel", "Teschio");

    // Vehicles
    t.insert("aircraft", "Aircraft", "Avion", "Flugzeug", "Aereo");
    t.insert("bicycle", "Bicycle", "Vélo", "Fahrrad", "Bicicletta");
    t.insert("boat", "Boat", "Bateau", "Boot", "Barca");
    t.insert("bus", "Bus", "Bus", "Bus", "Autobus");
    t.insert("car", "Car", "Voiture", "Auto", "Macchina");
    t.insert("cart", "Cart", "Chariot", "Wagen", "Carrello");
    t.insert("motorcycle", "Motorcycle", "Moto", "Motorrad", "Motocicletta");
    t.insert("taxi", "Taxi", "Taxi", "Taxi", "Taxi");
    t.insert("train", "Train", "Train", "Zug", "Treno");
    t.insert("truck", "Truck", "Camion", "Lastwagen", "Camion");
    t.insert("vehicle", "Vehicle", "Véhicule", "Fahrzeug", "Veicolo");
    t.insert("wheel", "Wheel", "Roue", "Rad", "Ruota");
    t.insert("wheelchair", "Wheelchair", "Fauteuil roulant", "Rollstuhl", "Sedia a rotelle");

    // Street & Infrastructure
    t.insert("bench", "Bench", "Banc", "Bank", "Panchina");
    t.insert("billboard", "Billboard", "Panneau publicitaire", "Werbetafel", "Cartellone pubblicitario");
    t.insert("christmas_tree", "Christmas Tree", "Sapin de Noël", "Weihnachtsbaum", "Albero di Natale");
    t.insert("door", "Door", "Porte", "Tür", "Porta");
    t.insert("door_handle", "Door Handle", "Poignée de porte", "Türklinke", "Maniglia della porta");
    t.insert("fire_hydrant", "Fire Hydrant", "Bouche d'incendie", "Hydrant", "Idrante");
    t.insert("flag", "Flag", "Drapeau", "Flagge", "Bandiera");
    t.insert("parking_meter", "Parking Meter", "Parcmètre", "Parkuhr", "Parchimetro");
    t.insert("poster", "Poster", "Affiche", "Plakat", "Poster");
    t.insert("sculpture", "Sculpture", "Sculpture", "Skulptur", "Scultura");
    t.insert("street_light", "Street Light", "Lampadaire", "Straßenlaterne", "Lampione");
    t.insert("traffic_light", "Traffic Light", "Feu de circulation", "Ampel", "Semaforo");
    t.insert("traffic_sign", "Traffic Sign", "Panneau de signalisation", "Verkehrsschild", "Segnale stradale");
    t.insert("waste_container", "Waste Container", "Poubelle", "Mülleimer", "Contenitore dei rifiuti");
    t.insert("water_feature", "Water Feature", "Fontaine", "Wasserspiel", "Fontana");
    t.insert("window", "Window", "Fenêtre", "Fenster", "Finestra");

    // Clothing & Accessories
    t.insert("backpack", "Backpack", "Sac à dos", "Rucksack", "Zaino");
    t.insert("clothing", "Clothing", "Vêtements", "Kleidung", "Abbigliamento");
    t.insert("coat", "Coat", "Manteau", "Mantel", "Cappotto");
    t.insert("dress", "Dress", "Robe", "Kleid", "Vestito");
    t.insert("fedora", "Fedora", "Fedora", "Fedora", "Fedora");
    t.insert("footwear", "Footwear", "Chaussures", "Schuhe", "Calzature");
    t.insert("glasses", "Glasses", "Lunettes", "Brille", "Occhiali");
    t.insert("handbag", "Handbag", "Sac à main", "Handtasche", "Borsa");
    t.insert("headwear", "Headwear", "Couvre-chef", "Kopfbedeckung", "Copricapo");
    t.insert("roller_skates", "Roller Skates", "Patins à roulettes", "Rollschuhe", "Pattini a rotelle");
    t.insert("shirt", "Shirt", "Chemise", "Hemd", "Camicia");
    t.insert("shorts", "Shorts", "Short", "Shorts", "Pantaloncini");
    t.insert("skirt", "Skirt", "Jupe", "Rock", "Gonna");
    t.insert("sock", "Sock", "Chaussette", "Socke", "Calzino");
    t.insert("suit", "Suit", "Costume", "Anzug", "Abito");
    t.insert("suitcase", "Suitcase", "Valise", "Koffer", "Valigia");
    t.insert("tie", "Tie", "Cravate", "Krawatte", "Cravatta");
    t.insert("trousers", "Trousers", "Pantalon", "Hose", "Pantaloni");
    t.insert("umbrella", "Umbrella", "Parapluie", "Regenschirm", "Ombrello");

    // Sports & Recreation
    t.insert("baseball_bat", "Baseball Bat", "Batte de baseball", "Baseballschläger", "Mazza da baseball");
    t.insert("baseball_glove", "Baseball Glove", "Gant de baseball", "Baseballhandschuh", "Guanto da baseball");
    t.insert("football", "Football", "Football", "Fußball", "Pallone");
    t.insert("frisbee", "Frisbee", "Frisbee", "Frisbee", "Frisbee");
    t.insert("kite", "Kite", "Cerf-volant", "Drachen", "Aquilone");
    t.insert("paddle", "Paddle", "Pagaie", "Paddel", "Pagaia");
    t.insert("rugby_ball", "Rugby Ball", "Ballon de rugby", "Rugbyball", "Palla da rugby");
    t.insert("skateboard", "Skateboard", "Skateboard", "Skateboard", "Skateboard");
    t.insert("skis", "Skis", "Skis", "Ski", "Sci");
    t.insert("snowboard", "Snowboard", "Snowboard", "Snowboard", "Snowboard");
    t.insert("sports_ball", "Sports Ball", "Ballon de sport", "Sportball", "Palla sportiva");
    t.insert("surfboard", "Surfboard", "Planche de surf", "Surfbrett", "Tavola da surf");
    t.insert("tennis_ball", "Tennis Ball", "Balle de tennis", "Tennisball", "Palla da tennis");
    t.insert("tennis_racket", "Tennis Racket", "Raquette de tennis", "Tennisschläger", "Racchetta da tennis");

    // Musical Instruments
    t.insert("accordion", "Accordion", "Accordéon", "Akkordeon", "Fisarmonica");
    t.insert("brass_instrument", "Brass Instrument", "Instrument en laiton", "Blechblasinstrument", "Strumento a ottone");
    t.insert("drum", "Drum", "Tambour", "Trommel", "Tamburo");
    t.insert("flute", "Flute", "Flûte", "Flöte", "Flauto");
    t.insert("guitar", "Guitar", "Guitare", "Gitarre", "Chitarra");
    t.insert("musical_instrument", "Musical Instrument", "Instrument de musique", "Musikinstrument", "Strumento musicale");
    t.insert("piano", "Piano", "Piano", "Klavier", "Pianoforte");
    t.insert("string_instrument", "String Instrument", "Instrument à cordes", "Saiteninstrument", "Strumento a corde");
    t.insert("violin", "Violin", "Violon", "Geige", "Violino");

    // Food & Drink
    t.insert("apple", "Apple", "Pomme", "Apfel", "Mela");
    t.insert("banana", "Banana", "Banane", "Banane", "Banana");
    t.insert("berry", "Berry", "Baie", "Beere", "Bacca");
    t.insert("broccoli", "Broccoli", "Brocoli", "Brokkoli", "Broccoli");
    t.insert("carrot", "Carrot", "Carotte", "Karotte", "Carota");
    t.insert("citrus", "Citrus", "Agrume", "Zitrusfrucht", "Agrume");
    t.insert("coconut", "Coconut", "Noix de coco", "Kokosnuss", "Cocco");
    t.insert("egg", "Egg", "Œuf", "Ei", "Uovo");
    t.insert("food", "Food", "Nourriture", "Essen", "Cibo");
    t.insert("grape", "Grape", "Raisin", "Traube", "Uva");
    t.insert("mushroom", "Mushroom", "Champignon", "Pilz", "Fungo");
    t.insert("pear", "Pear", "Poire", "Birne", "Pera");
    t.insert("pumpkin", "Pumpkin", "Citrouille", "Kürbis", "Zucca");
    t.insert("tomato", "Tomato", "Tomate", "Tomate", "Pomodoro");
    t.insert("drink", "Drink", "Boisson", "Getränk", "Bevanda");
    t.insert("hot_drink", "Hot Drink", "Boisson chaude", "Heißgetränk", "Bevanda calda");
    t.insert("juice", "Juice", "Jus", "Saft", "Succo");
    t.insert("bread", "Bread", "Pain", "Brot", "Pane");
    t.insert("cake", "Cake", "Gâteau", "Kuchen", "Torta");
    t.insert("cheese", "Cheese", "Fromage", "Käse", "Formaggio");
    t.insert("dessert", "Dessert", "Dessert", "Nachtisch", "Dolce");
    t.insert("donut", "Donut", "Beignet", "Donut", "Ciambella");
    t.insert("fast_food", "Fast Food", "Restauration rapide", "Fast Food", "Fast food");
    t.insert("french_fries", "French Fries", "Frites", "Pommes frites", "Patatine fritte");
    t.insert("hamburger", "Hamburger", "Hamburger", "Hamburger", "Hamburger");
    t.insert("hot_dog", "Hot Dog", "Hot-dog", "Hot Dog", "Hot dog");
    t.insert("ice_cream", "Ice Cream", "Glace", "Eiscreme", "Gelato");
    t.insert("pizza", "Pizza", "Pizza", "Pizza", "Pizza");
    t.insert("sandwich", "Sandwich", "Sandwich", "Sandwich", "Panino");
    t.insert("sushi", "Sushi", "Sushi", "Sushi", "Sushi");

    // Household Items
    t.insert("bed", "Bed", "Lit", "Bett", "Letto");
    t.insert("chair", "Chair", "Chaise", "Stuhl", "Sedia");
    t.insert("couch", "Couch", "Canapé", "Sofa", "Divano");
    t.insert("furniture", "Furniture", "Meuble", "Möbel", "Mobile");
    t.insert("shelves", "Shelves", "Étagères", "Regale", "Scaffali");
    t.insert("storage_cabinet", "Storage Cabinet", "Armoire de rangement", "Schrank", "Armadio");
    t.insert("table", "Table", "Table", "Tisch", "Tavolo");
    t.insert("bathtub", "Bathtub", "Baignoire", "Badewanne", "Vasca da bagno");
    t.insert("fireplace", "Fireplace", "Cheminée", "Kamin", "Camino");
    t.insert("microwave", "Microwave", "Micro-ondes", "Mikrowelle", "Microonde");
    t.insert("oven", "Oven", "Four", "Ofen", "Forno");
    t.insert("refrigerator", "Refrigerator", "Réfrigérateur", "Kühlschrank", "Frigorifero");
    t.insert("screen", "Screen", "Écran", "Bildschirm", "Schermo");
    t.insert("sink", "Sink", "Évier", "Waschbecken", "Lavandino");
    t.insert("tap", "Tap", "Robinet", "Wasserhahn", "Rubinetto");
    t.insert("toaster", "Toaster", "Grille-pain", "Toaster", "Tostapane");
    t.insert("toilet", "Toilet", "Toilette", "Toilette", "Toilette");

    // Objects & Miscellaneous
    t.insert("balloon", "Balloon", "Ballon", "Ballon", "Palloncino");
    t.insert("barrel", "Barrel", "Tonneau", "Fass", "Barile");
    t.insert("book", "Book", "Livre", "Buch", "Libro");
    t.insert("bottle", "Bottle", "Bouteille", "Flasche", "Bottiglia");
    t.insert("bowl", "Bowl", "Bol", "Schüssel", "Ciotola");
    t.insert("box", "Box", "Boîte", "Kiste", "Scatola");
    t.insert("camera", "Camera", "Appareil photo", "Kamera", "Macchina fotografica");
    t.insert("candle", "Candle", "Bougie", "Kerze", "Candela");
    t.insert("cannon", "Cannon", "Canon", "Kanone", "Cannone");
    t.insert("chopsticks", "Chopsticks", "Baguettes", "Essstäbchen", "Bacchette");
    t.insert("clock", "Clock", "Horloge", "Uhr", "Orologio");
    t.insert("coin", "Coin", "Pièce de monnaie", "Münze", "Moneta");
    t.insert("computer_keyboard", "Computer Keyboard", "Clavier d'ordinateur", "Computertastatur", "Tastiera del computer");
    t.insert("computer_mouse", "Computer Mouse", "Souris d'ordinateur", "Computermaus", "Mouse del computer");
    t.insert("cooking_pan", "Cooking Pan", "Poêle", "Pfanne", "Padella");
    t.insert("cup", "Cup", "Tasse", "Tasse", "Tazza");
    t.insert("curtain", "Curtain", "Rideau", "Vorhang", "Tenda");
    t.insert("doll", "Doll", "Poupée", "Puppe", "Bambola");
    t.insert("flowerpot", "Flowerpot", "Pot de fleurs", "Blumentopf", "Vaso di fiori");
    t.insert("fork", "Fork", "Fourchette", "Gabel", "Forchetta");
    t.insert("hair_dryer", "Hair Dryer", "Sèche-cheveux", "Haartrockner", "Asciugacapelli");
    t.insert("headphones", "Headphones", "Écouteurs", "Kopfhörer", "Cuffie");
    t.insert("jug", "Jug", "Cruche", "Krug", "Brocca");
    t.insert("knife", "Knife", "Couteau", "Messer", "Coltello");
    t.insert("lamp", "Lamp", "Lampe", "Lampe", "Lampada");
    t.insert("laptop", "Laptop", "Ordinateur portable", "Laptop", "Computer portatile");
    t.insert("microphone", "Microphone", "Microphone", "Mikrofon", "Microfono");
    t.insert("pen", "Pen", "Stylo", "Stift", "Penna");
    t.insert("phone", "Phone", "Téléphone", "Telefon", "Telefono");
    t.insert("pillow", "Pillow", "Oreiller", "Kissen", "Cuscino");
    t.insert("plate", "Plate", "Assiette", "Teller", "Piatto");
    t.insert("potted_plant", "Potted Plant", "Plante en pot", "Topfpflanze", "Pianta in vaso");
    t.insert("remote", "Remote", "Télécommande", "Fernbedienung", "Telecomando");
    t.insert("scissors", "Scissors", "Ciseaux", "Schere", "Forbici");
    t.insert("snowman", "Snowman", "Bonhomme de neige", "Schneemann", "Pupazzo di neve");
    t.insert("spoon", "Spoon", "Cuillère", "Löffel", "Cucchiaio");
    t.insert("teapot", "Teapot", "Théière", "Teekanne", "Teiera");
    t.insert("teddy_bear", "Teddy Bear", "Ours en peluche", "Teddybär", "Orsacchiotto");
    t.insert("tin_can", "Tin Can", "Boîte de conserve", "Dose", "Lattina");
    t.insert("toothbrush", "Toothbrush", "Brosse à dents", "Zahnbürste", "Spazzolino da denti");
    t.insert("toy", "Toy", "Jouet", "Spielzeug", "Giocattolo");
    t.insert("watch", "Watch", "Montre", "Uhr", "Orologio");
    t.insert("wine_glass", "Wine Glass", "Verre à vin", "Weinglas", "Bicchiere da vino");

    // Plants & Flowers
    t.insert("flower", "Flower", "Fleur", "Blume", "Fiore");
    t.insert("rose", "Rose", "Rose", "Rose", "Rosa");
    t.insert("sunflower", "Sunflower", "Tournesol", "Sonnenblume", "Girasole");

    // Animals
    t.insert("animal", "Animal", "Animal", "Tier", "Animale");
    t.insert("bird", "Bird", "Oiseau", "Vogel", "Uccello");
    t.insert("parrot", "Parrot", "Perroquet", "Papagei", "Pappagallo");
    t.insert("water_bird", "Water Bird", "Oiseau aquatique", "Wasservogel", "Uccello acquatico");
    t.insert("butterfly", "Butterfly", "Papillon", "Schmetterling", "Farfalla");
    t.insert("insect", "Insect", "Insecte", "Insekt", "Insetto");
    t.insert("dolphin", "Dolphin", "Dauphin", "Delfin", "Delfino");
    t.insert("fish", "Fish", "Poisson", "Fisch", "Pesce");
    t.insert("goldfish", "Goldfish", "Poisson rouge", "Goldfisch", "Pesce rosso");
    t.insert("jellyfish", "Jellyfish", "Méduse", "Qualle", "Medusa");
    t.insert("seal", "Seal", "Phoque", "Robbe", "Foca");
    t.insert("shellfish", "Shellfish", "Crustacé", "Schalentier", "Crostaceo");
    t.insert("whale", "Whale", "Baleine", "Wal", "Balena");
    t.insert("alpaca", "Alpaca", "Alpaga", "Alpaka", "Alpaca");
    t.insert("bear", "Bear", "Ours", "Bär", "Orso");
    t.insert("big_cat", "Big Cat", "Grand félin", "Großkatze", "Grande felino");
    t.insert("camel", "Camel", "Chameau", "Kamel", "Cammello");
    t.insert("cat", "Cat", "Chat", "Katze", "Gatto");
    t.insert("cow", "Cow", "Vache", "Kuh", "Mucca");
    t.insert("crocodile", "Crocodile", "Crocodile", "Krokodil", "Coccodrillo");
    t.insert("deer", "Deer", "Cerf", "Hirsch", "Cervo");
    t.insert("dog", "Dog", "Chien", "Hund", "Cane");
    t.insert("elephant", "Elephant", "Éléphant", "Elefant", "Elefante");
    t.insert("frog", "Frog", "Grenouille", "Frosch", "Rana");
    t.insert("giraffe", "Giraffe", "Girafe", "Giraffe", "Giraffa");
    t.insert("hippopotamus", "Hippopotamus", "Hippopotame", "Nilpferd", "Ippopotamo");
    t.insert("horse", "Horse", "Cheval", "Pferd", "Cavallo");
    t.insert("kangaroo", "Kangaroo", "Kangourou", "Känguru", "Canguro");
    t.insert("panda", "Panda", "Panda", "Panda", "Panda");
    t.insert("pig", "Pig", "Cochon", "Schwein", "Maiale");
    t.insert("polar_bear", "Polar Bear", "Ours polaire", "Eisbär", "Orso polare");
    t.insert("rabbit", "Rabbit", "Lapin", "Kaninchen", "Coniglio");
    t.insert("reptile", "Reptile", "Reptile", "Reptil", "Rettile");
    t.insert("rhinoceros", "Rhinoceros", "Rhinocéros", "Nashorn", "Rinoceronte");
    t.insert("sheep", "Sheep", "Mouton", "Schaf", "Pecora");
    t.insert("squirrel", "Squirrel", "Écureuil", "Eichhörnchen", "Scoiattolo");
    t.insert("turtle", "Turtle", "Tortue", "Schildkröte", "Tartaruga");
    t.insert("zebra", "Zebra", "Zèbre", "Zebra", "Zebra");
}
