//! Random real-order data for I_v(x).
//!
//! Generated offline with 50-digit arithmetic. Orders are multiples of
//! 1/1024 in [-100, 100]; arguments are log-uniform in [1e-3, 700] and
//! exactly representable as `f32`.

#![allow(clippy::excessive_precision)]

#[rustfmt::skip]
pub static BESSEL_I_DATA: [[f64; 3]; 150] = [
    [-99.6357421875, 0.8016738295555115, -1.83050830172538852638272207527044895e194],
    [-96.671875, 115.05136108398438, 51134302829644292450715346868156.7444],
    [-95.0615234375, 98.44672393798828, 39098556753998964304158.5110810940566],
    [-92.43359375, 0.07652091234922409, 2.99711840876994853588894822224120759e271],
    [-87.4365234375, 11.264103889465332, -8.50692844616026649344586536327867182e64],
    [-84.6650390625, 236.89617919921875, 6.02931502172845332044792867906328173e94],
    [-83.4267578125, 0.02079462818801403, -2.68198042211857598718938186475208068e288],
    [-82.501953125, 0.4674686789512634, 2.02941699940722754501013552470057900e173],
    [-81.3603515625, 1.7337393760681152, -1.11048941329197214729149915822389823e124],
    [-80.6181640625, 56.30874252319336, 6.72341394025828890287061052411018465],
    [-79.8671875, 1.0386675596237183, -3.42652361234295232403828278813256807e138],
    [-77.51953125, 1.4989161491394043, -2.90525247966855400093991163437562641e121],
    [-76.765625, 3.493764877319336, 3.54015094123156192784746246602731103e91],
    [-76.560546875, 0.41451650857925415, 1.86688963644852412699516995875058023e162],
    [-73.951171875, 0.2822731137275696, -1.35269332533545848749512356782760265e167],
    [-70.9873046875, 0.2469468116760254, 4.41702307627203809770077713738528888e162],
    [-70.5048828125, 7.989757061004639, 1.44011553006440104110119478979671372e56],
    [-69.58984375, 0.07292134314775467, -1.11182163700245002360333552626271437e197],
    [-66.0361328125, 0.02113345079123974, 1.07216434139700732114523107994284285e220],
    [-64.1767578125, 1.548667311668396, 9.22431829257838661227227035907641594e93],
    [-58.845703125, 14.99228572845459, 23496424972590545682004602.1288816606],
    [-55.625, 1.4472473859786987, -5.35826906117912577000766663500920830e79],
    [-55.482421875, 0.042101308703422546, -5.41240803986013590400286113322489612e164],
    [-55.2978515625, 24.597021102905273, -6963265968.63718978480555380050012716],
    [-52.4775390625, 3.8392016887664795, 4.14525491814361173305677849150446494e51],
    [-48.6474609375, 26.21346092224121, 12037.9352857371987397531068799851101],
    [-48.181640625, 0.8147853016853333, 5.51358102067792938633549012701585257e77],
    [-46.4130859375, 466.0613098144531, 4.68533356327882515091492773857849314e199],
    [-43.55078125, 28.428497314453125, -0.215860742589185529049180154797879503],
    [-42.5712890625, 2.904430389404297, 1.05314524511998957512135032409564166e43],
    [-41.8291015625, 0.015427716076374054, -6.81170768970514777883855974361337735e136],
    [-41.220703125, 21.753698348999023, -4129.41956709472970450848109217647359],
    [-40.8525390625, 9.899123191833496, 1541831716745845043.64402775255688466],
    [-40.802734375, 0.529230535030365, 2.62887759367723525483057164194678733e70],
    [-39.5498046875, 0.007012077607214451, -1.55399283471257270971520028588272078e142],
    [-36.96484375, 0.0027572689577937126, 6.31760708140759748897718851222645532e145],
    [-36.4189453125, 40.57815933227539, 4451310220.66870655973295261400405301],
    [-33.9130859375, 0.9544371366500854, -4.29089097842307653895462216267241413e46],
    [-33.291015625, 0.01760631985962391, -4.86882311901649749948157496968594306e103],
    [-32.9697265625, 0.419302761554718, 1.67591349836394172148117044206068333e56],
    [-32.294921875, 0.01817302405834198, 4.97278653411564174111097154234264993e99],
    [-31.7763671875, 133.898681640625, 1.13091809634422988927478011112501771e55],
    [-31.7060546875, 1.4198707342147827, -3.89058735100536214061296236872961437e37],
    [-28.4775390625, 397.5395202636719, 3.21539131527089382989788827654430712e170],
    [-27.6044921875, 108.7667007446289, 1.99434780802581310039039486605878185e44],
    [-26.6474609375, 0.008654949255287647, 3.52946994680653202401238715007914388e88],
    [-26.357421875, 43.34463882446289, 154820234844265.124963735258587509352],
    [-25.56640625, 82.86973571777344, 836941042625434969251097608433879.888],
    [-23.65625, 460.154296875, 7.04263078791622541806598834238530290e197],
    [-23.6005859375, 0.002184310695156455, -1.75937691822504565676804942156444057e91],
    [-23.3740234375, 0.00854650791734457, -2.53794846206793084962456132253330400e76],
    [-20.935546875, 0.4298036992549896, 12212455583861351578643036039975.8138],
    [-20.7138671875, 26.689558029174805, 12229412.7417335831697856625385926556],
    [-20.44921875, 4.921360492706299, 1079667098.25797016967755369771772275],
    [-19.7109375, 23.412471771240234, 399022.746050112136270258873974277572],
    [-19.6455078125, 0.028959378600120544, -1.65116948423736396604377547037998154e52],
    [-16.3251953125, 1.1467959880828857, 7461121551490947.90482564251511995953],
    [-14.5400390625, 0.0022510963026434183, 6.05442149970285972384485786437681097e52],
    [-14.3369140625, 0.3099924623966217, 1688993615686185075077.81364481300933],
    [-14.0244140625, 35.7179069519043, 13837212365006.0030184088973309452725],
    [-13.697265625, 0.005428665317595005, -1.04432640946774865304975403162652243e44],
    [-13.533203125, 0.27324268221855164, -294565317113625206897.258823944665509],
    [-13.3046875, 0.024177907034754753, -8806080932201573023210320565278901.84],
    [-13.25, 0.16617698967456818, -42057645612706034533405.3411110922128],
    [-12.6103515625, 2.022550344467163, 42880208.0511555714090542440015666924],
    [-12.583984375, 10.173439979553223, 2.21392393824187617456387841690665723],
    [-12.251953125, 0.003894180990755558, 2.72221883353349930449660606877045847e40],
    [-11.66796875, 0.01685258187353611, -7833982413523061834945451713147.00551],
    [-9.47265625, 1.3825421333312988, -1112579.85069163898239900661604140900],
    [-7.650390625, 3.9315056800842285, -2.30717779822211617878191909001083488],
    [-6.1025390625, 74.69679260253906, 9918852840033079439204012057922.68111],
    [-5.8466796875, 0.0097506707534194, -449450012238189.314647235996005444393],
    [-5.80078125, 0.028260694816708565, -859585280341.099330137041111160704268],
    [-4.5205078125, 0.09774204343557358, 3205115.43359388057744410660852873678],
    [-3.9990234375, 2.6243185997009277, 0.171727629764825380437186156679906658],
    [-1.3671875, 0.6730757355690002, -0.761049842861053684746801234186362280],
    [1.7626953125, 0.006595113780349493, 0.0000259667440095059786101307302552876286],
    [1.8173828125, 0.42218080163002014, 0.0353492713920405092247237320285558893],
    [4.3505859375, 2.13053560256958, 0.0393368368246454758331649215382980843],
    [6.6748046875, 47.0435791015625, 9751473687964908483.88065649137723221],
    [9.716796875, 0.005407961551100016, 5.95820948039284525060410464993117112e-32],
    [11.6162109375, 0.5329439043998718, 1.17164509478238491305081988619613433e-15],
    [11.857421875, 0.07215908169746399, 2.33668200939490185134953080582441509e-26],
    [16.2744140625, 15.373406410217285, 135.142507206060014613404214243853078],
    [17.001953125, 0.15369510650634766, 3.16359030926194413442000197828869832e-34],
    [17.02734375, 0.14971701800823212, 1.76353363473396357623215331008307541e-34],
    [17.060546875, 6.4446234703063965, 0.00000194666328386707782122774953890759310],
    [17.763671875, 23.427364349365234, 1728752.50753466521978742858328767586],
    [19.171875, 0.0016010049730539322, 2.11106240627935326266970948421638023e-77],
    [19.9091796875, 1.001537561416626, 5.73002937030242589431754166552788035e-25],
    [20.1923828125, 176.91842651367188, 6.46710542337943281982693011834960825e74],
    [20.3173828125, 0.003957903012633324, 1.84973862025483240818773685702585137e-74],
    [22.4873046875, 271.2464599609375, 6.02464133200949318610476279428193514e115],
    [26.2060546875, 2.5410900115966797, 7.10678663802159154767587695023640974e-25],
    [26.7607421875, 0.0015219004126265645, 7.07488836567833900751547279456531547e-112],
    [29.1083984375, 2.178081750869751, 9.75976887973643185095986113385639804e-31],
    [31.900390625, 0.6716400384902954, 4.11589990319722729116761416460932110e-51],
    [34.400390625, 0.0019665320869535208, 2.88273671523766194563537633986580911e-143],
    [35.1611328125, 0.4429611563682556, 5.21990660833904886871653066917314700e-64],
    [35.3115234375, 0.4719119668006897, 2.27306266482310902890014449995283554e-63],
    [35.474609375, 89.5451889038086, 30541898445609138091408586132207619.5],
    [35.59375, 535.738525390625, 2.46047988460197942629802194032038250e230],
    [36.138671875, 0.02876829169690609, 4.37604916048642968180679369666602990e-109],
    [36.8173828125, 3.2730863094329834, 1.13630720876087957114275363460136792e-35],
    [38.2529296875, 0.0021718330681324005, 3.09482582824679674759339360625648764e-159],
    [39.916015625, 25.697113037109375, 0.0144991695884543895073436940238225869],
    [40.115234375, 19.496732711791992, 0.0000000356719158101750267801133163065434431],
    [40.8603515625, 353.7140808105469, 8.27074120596604668054021336194349321e150],
    [42.84375, 0.005700753536075354, 2.71153960458690145461822859747701247e-162],
    [45.88671875, 5.602752685546875, 1.12004287123888807632246118836293581e-37],
    [47.689453125, 0.16322414577007294, 3.39926508444705043625569551535305942e-113],
    [48.4716796875, 3.558516263961792, 1.85029414140992652621776846460413742e-50],
    [49.8076171875, 0.00479502696543932, 2.17066612770651401459976915194991391e-195],
    [50.74609375, 0.6918500661849976, 7.07724399279671855795871662145120085e-90],
    [56.564453125, 0.07823462039232254, 3.43630214161867738726859880198288969e-156],
    [59.755859375, 380.995849609375, 5.51238663525390025568943529936521673e161],
    [61.0390625, 0.6630594730377197, 9.08915323315986001750416344902405632e-114],
    [61.1455078125, 0.006360212340950966, 2.08760929633446711422284958496461938e-237],
    [61.533203125, 0.1265515238046646, 3.76688395349537377591255949940785456e-159],
    [61.875, 0.006779002957046032, 8.01104742882169621703390336354409323e-239],
    [63.66015625, 0.19567081332206726, 1.76217089861627135483086403597645000e-153],
    [64.3251953125, 2.472937822341919, 1.76860434089118200902407299305207842e-84],
    [64.4609375, 0.3246825933456421, 1.46373425215623225987724427411166147e-141],
    [64.771484375, 0.08490194380283356, 4.21496889380360794367834984914253010e-180],
    [65.021484375, 1.425724983215332, 3.09176531356838415069528644738413041e-101],
    [65.7626953125, 5.098495960235596, 2.92081911995274483562217466546037172e-66],
    [66.94921875, 0.020755168050527573, 5.13017713975703576491038556461708183e-228],
    [67.5576171875, 10.313196182250977, 5.13503829114113424843603307644714087e-48],
    [68.0224609375, 20.454313278198242, 7.97102931567189183953583504197478564e-28],
    [68.9658203125, 13.722570419311523, 6.36632341025166644490601197310168615e-41],
    [70.9443359375, 529.4121704101562, 1.24918561498668743693283923157904350e226],
    [72.89453125, 166.48843383789062, 8.92923279374321746388325647001220600e63],
    [73.0126953125, 0.0367610901594162, 4.00052798671741698275707991607071215e-233],
    [74.21875, 0.587231457233429, 3.71979667603909665796969721621438775e-148],
    [74.8310546875, 275.0097961425781, 2.59464541826471947988476694635061632e113],
    [76.07421875, 0.46499186754226685, 2.42998749570480844890002867854565290e-160],
    [78.3818359375, 0.2815464735031128, 3.03114390057050975345559398857263177e-183],
    [79.36328125, 383.1789245605469, 1.44709301127628070297214871372639250e161],
    [80.0517578125, 0.8766992688179016, 2.37010709191780513551712194222406066e-148],
    [82.05078125, 4.7454962730407715, 1.10857586219199000124499567131446058e-92],
    [82.3154296875, 0.9515901207923889, 1.46577538080640631748229797744108086e-150],
    [83.513671875, 2.710272789001465, 2.80487948175852915754342928149308032e-115],
    [84.8955078125, 0.209525927901268, 3.73372349056365872846818558452519274e-212],
    [87.18359375, 0.04203903675079346, 1.20165892111582869358728481830638995e-279],
    [89.2451171875, 0.09317445009946823, 2.83833666034976786416487123128404716e-256],
    [89.474609375, 0.3680947422981262, 1.21740181194113250654061431790232467e-203],
    [93.1640625, 0.18665410578250885, 4.51972797601278012543337727315045775e-241],
    [93.4296875, 112.63896942138672, 26261583115370863761888149648167.8040],
    [93.96875, 0.532352864742279, 1.02231346342852210470311951993052239e-200],
    [99.830078125, 0.15104812383651733, 2.34068198694112539048761244426834227e-270],
];
